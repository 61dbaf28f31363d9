#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! dockershrink library
//!
//! Client side of the dockershrink NodeJS Docker image optimizer. It finds a
//! project's Dockerfile, .dockerignore and package.json, sends them to the
//! dockershrink service and writes the optimised files it gets back.
//!
//! # Example
//!
//! Building the request body from located inputs:
//!
//! ```
//! use dockershrink::config::OptimizeOptions;
//! use dockershrink::project::{FileLocator, OptimizationRequest};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let project = TempDir::new().unwrap();
//! fs::write(project.path().join("Dockerfile"), "FROM node:20\n").unwrap();
//!
//! let inputs = FileLocator::new(project.path())
//!     .locate_all(&OptimizeOptions::default())
//!     .unwrap();
//! let request = OptimizationRequest::build(inputs, None);
//!
//! assert_eq!(request.dockerfile.as_deref(), Some("FROM node:20\n"));
//! assert!(request.package_json.is_none());
//! ```

/// HTTP transport to the optimization service
pub mod api;
/// Command handlers for CLI operations
pub mod cmd;
/// Credential storage and per-invocation settings
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared console output helpers
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Writing and presenting optimization results
pub mod output;
/// Locating project inputs and building the request
pub mod project;
