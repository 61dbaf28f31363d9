//! Project inputs: locating build-context files and assembling the request

pub mod locator;
pub mod request;

pub use locator::{FileLocator, InputKind, ProjectFile, ProjectInputs, MANIFEST_FALLBACK_DIR};
pub use request::OptimizationRequest;
