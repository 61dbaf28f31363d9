//! Configuration for dockershrink
//!
//! This module provides:
//! - The persisted API key (`~/.dsconfig.json`) behind the [`CredentialStore`] trait
//! - Service location settings ([`ServerSettings`])
//! - The per-invocation `optimize` options ([`OptimizeOptions`])

pub mod credential;
pub mod settings;

pub use credential::{
    CredentialFile, CredentialStore, FileCredentialStore, MemoryCredentialStore,
    CREDENTIAL_FILE_NAME,
};
pub use settings::{
    OptimizeOptions, ServerSettings, DEFAULT_SERVER_URL, OPENAI_API_KEY_ENV, OPTIMIZE_PATH,
    SERVER_URL_ENV,
};
