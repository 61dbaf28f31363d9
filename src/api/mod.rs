//! Transport to the dockershrink optimization service

pub mod client;
pub mod types;

pub use client::{decode_response, ApiClient, OptimizeService};
pub use types::{Action, OptimizationResponse};
