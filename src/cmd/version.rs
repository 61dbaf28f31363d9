//! Version command implementation

/// Version string baked in at build time
///
/// Release builds set `DOCKERSHRINK_VERSION`; everything else reports the
/// crate version.
pub const VERSION: &str = match option_env!("DOCKERSHRINK_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Line printed by `dockershrink version`
pub fn version_line() -> String {
    format!("Dockershrink CLI version {}", VERSION)
}

/// Print the CLI version
pub fn cmd_version() {
    println!("{}", version_line());
}
