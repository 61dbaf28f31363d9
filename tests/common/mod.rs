//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - NodeJS project fixtures
//! - A throwaway home directory holding the credential file
//! - A preconfigured `dockershrink` command

pub mod fixtures;

use assert_cmd::Command;
use std::path::Path;

/// API key stored by the fixtures that need a configured user
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "ds-test-key";

/// The dockershrink binary with a clean, isolated environment
#[allow(dead_code)]
pub fn dockershrink(home: &Path, project: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dockershrink"));
    cmd.env("HOME", home)
        .env_remove("OPENAI_API_KEY")
        .env_remove("SERVER_URL")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG")
        .current_dir(project);
    cmd
}
