//! Test fixture helpers for creating NodeJS projects and user homes

#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Dockerfile used by [`create_node_project`]
pub const DOCKERFILE: &str =
    "FROM node:20\nWORKDIR /app\nCOPY . .\nRUN npm install\nCMD [\"node\", \"index.js\"]\n";

/// .dockerignore used by [`create_node_project`]
pub const DOCKERIGNORE: &str = "node_modules\n";

/// package.json used by [`create_node_project`]
pub const PACKAGE_JSON: &str =
    r#"{"name":"app","version":"1.0.0","scripts":{"start":"node index.js"}}"#;

/// Creates a NodeJS project with a Dockerfile, .dockerignore and package.json
pub fn create_node_project() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("Dockerfile"), DOCKERFILE)?;
    fs::write(temp_dir.path().join(".dockerignore"), DOCKERIGNORE)?;
    fs::write(temp_dir.path().join("package.json"), PACKAGE_JSON)?;
    Ok(temp_dir)
}

/// Creates a project whose package.json lives under src/
pub fn create_nested_manifest_project() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("Dockerfile"), DOCKERFILE)?;
    fs::create_dir(temp_dir.path().join("src"))?;
    fs::write(temp_dir.path().join("src").join("package.json"), PACKAGE_JSON)?;
    Ok(temp_dir)
}

/// Creates a home directory with a stored credential
pub fn home_with_credential(api_key: &str) -> anyhow::Result<TempDir> {
    let home = TempDir::new()?;
    fs::write(
        home.path().join(".dsconfig.json"),
        format!("{{\"api_key\":\"{}\"}}\n", api_key),
    )?;
    Ok(home)
}
