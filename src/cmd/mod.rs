//! Command handlers for dockershrink CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod init;
pub mod optimize;
pub mod version;
pub mod workflow;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use optimize::cmd_optimize;
pub use version::cmd_version;
pub use workflow::OptimizeWorkflow;
