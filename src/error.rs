//! Error types with contextual suggestions
//!
//! Every fatal failure of the CLI maps to one [`DockershrinkError`] variant.
//! Missing optional input files are not errors: the locator reports them as
//! "not found" and the pipeline continues with partial inputs.
//!
//! # Examples
//!
//! ```
//! use dockershrink::error::DockershrinkError;
//!
//! let err = DockershrinkError::Service {
//!     status: 500,
//!     message: "boom".to_string(),
//! };
//! assert_eq!(err.to_string(), "boom");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every fatal error
pub const EXIT_FAILURE: i32 = 1;

/// Errors raised by the dockershrink client
#[derive(Error, Debug)]
pub enum DockershrinkError {
    /// Credential file does not exist or holds no key
    #[error("API key not configured. Please run 'dockershrink init --api-key <api key>' first.")]
    ConfigMissing {
        /// Expected credential file location
        path: PathBuf,
    },

    /// Credential file exists but is not valid JSON
    #[error("Cannot read config file {path}: {source}")]
    ConfigParse {
        /// Credential file location
        path: PathBuf,
        #[source]
        /// JSON decoding error
        source: serde_json::Error,
    },

    /// Credential file could not be created or written
    #[error("Cannot write config file {path}: {source}")]
    ConfigWrite {
        /// Credential file location
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// No home directory to keep the credential file in
    #[error("Cannot determine home directory for the config file")]
    HomeDirUnavailable,

    /// `init` was given an empty key
    #[error("--api-key is required")]
    MissingApiKey,

    /// The package manifest exists but is not valid JSON
    #[error("Invalid JSON in {path}: {source}")]
    ManifestParse {
        /// Manifest location
        path: PathBuf,
        #[source]
        /// JSON decoding error
        source: serde_json::Error,
    },

    /// Request payload could not be serialized
    #[error("Cannot prepare API request: {0}")]
    RequestBuild(#[source] serde_json::Error),

    /// Transport-level failure talking to the service
    #[error("Cannot send API request to {url}: {source}")]
    Network {
        /// Target URL
        url: String,
        #[source]
        /// HTTP client error
        source: reqwest::Error,
    },

    /// Service reply could not be decoded
    #[error("Cannot parse {context}: {source}")]
    ResponseParse {
        /// What was being decoded
        context: String,
        #[source]
        /// JSON decoding error
        source: serde_json::Error,
    },

    /// Service answered with a non-200 status
    #[error("{message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Error string supplied by the service
        message: String,
    },

    /// Output directory or file could not be written
    #[error("Cannot write {path}: {source}")]
    OutputWrite {
        /// Output location
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl DockershrinkError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dockershrink::error::DockershrinkError;
    /// use std::path::PathBuf;
    ///
    /// let error = DockershrinkError::ConfigWrite {
    ///     path: PathBuf::from("/home/me/.dsconfig.json"),
    ///     source: std::io::Error::other("read-only file system"),
    /// };
    /// assert!(error.suggestion().unwrap().contains("permissions"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConfigMissing { .. } => None,
            Self::ConfigParse { path, .. } => Some(format!(
                "Re-run 'dockershrink init --api-key <api key>' to rewrite {}",
                path.display()
            )),
            Self::ConfigWrite { path, .. } => Some(format!(
                "Check file permissions and that {} is writable",
                path.display()
            )),
            Self::HomeDirUnavailable => Some("Set the HOME environment variable".to_string()),
            Self::MissingApiKey => {
                Some("Usage: dockershrink init --api-key <api key>".to_string())
            }
            Self::ManifestParse { .. } => Some(
                "Fix the syntax of package.json or point --package-json at a valid file"
                    .to_string(),
            ),
            Self::Network { .. } => Some(
                "Check your network connection, or set SERVER_URL to point at another backend"
                    .to_string(),
            ),
            Self::OutputWrite { .. } => Some(
                "Check that the current directory is writable by your user".to_string(),
            ),
            Self::RequestBuild(_) | Self::ResponseParse { .. } | Self::Service { .. } => None,
        }
    }

    /// Get the exit code for this error.
    ///
    /// Every fatal error terminates the process with status 1.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Error formatter with colors and structured output
///
/// The rendered message is the single `Error: ...` line the user sees. The
/// actionable hint from [`DockershrinkError::suggestion`] is logged at info
/// level instead, so it only shows with `RUST_LOG=info`.
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain, styled for stderr
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            style("Error:").for_stderr().red().bold(),
            error
        ));

        // Typed errors already carry their source in the message
        if error.downcast_ref::<DockershrinkError>().is_none() {
            let mut source = error.source();
            let mut indent = 1;
            while let Some(err) = source {
                output.push_str(&format!(
                    "{}{} {}\n",
                    "  ".repeat(indent),
                    style("caused by:").for_stderr().yellow(),
                    err
                ));
                source = err.source();
                indent += 1;
            }
        }

        output
    }

    /// Follow-up hint for a typed error, if it has one
    pub fn suggestion(error: &anyhow::Error) -> Option<String> {
        error
            .downcast_ref::<DockershrinkError>()
            .and_then(DockershrinkError::suggestion)
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .downcast_ref::<DockershrinkError>()
            .map_or(EXIT_FAILURE, DockershrinkError::exit_code)
    }
}
