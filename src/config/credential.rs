//! Credential storage for the dockershrink API key

use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::DockershrinkError;
use crate::infra::{FileSystem, RealFileSystem};

/// Credential file name, relative to the user's home directory
pub const CREDENTIAL_FILE_NAME: &str = ".dsconfig.json";

/// On-disk shape of the credential file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialFile {
    /// Dockershrink API key
    #[serde(default)]
    pub api_key: String,
}

/// Source and sink of the API key used to authenticate against the service
pub trait CredentialStore {
    /// Persist `api_key`, replacing any previous value
    fn save(&self, api_key: &str) -> Result<(), DockershrinkError>;

    /// Return the stored API key
    fn load(&self) -> Result<String, DockershrinkError>;
}

/// Stores the credential as JSON in a per-user file
pub struct FileCredentialStore<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl FileCredentialStore<RealFileSystem> {
    /// Store rooted at `$HOME/.dsconfig.json`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dockershrink::config::{CredentialStore, FileCredentialStore};
    ///
    /// let store = FileCredentialStore::user_default()?;
    /// let api_key = store.load()?;
    /// # Ok::<(), dockershrink::error::DockershrinkError>(())
    /// ```
    pub fn user_default() -> Result<Self, DockershrinkError> {
        let home = dirs::home_dir().ok_or(DockershrinkError::HomeDirUnavailable)?;
        Ok(Self::at(home.join(CREDENTIAL_FILE_NAME)))
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> FileCredentialStore<FS> {
    /// Store with a custom filesystem implementation
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// Location of the credential file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<FS: FileSystem> CredentialStore for FileCredentialStore<FS> {
    fn save(&self, api_key: &str) -> Result<(), DockershrinkError> {
        if api_key.is_empty() {
            return Err(DockershrinkError::MissingApiKey);
        }

        let record = CredentialFile {
            api_key: api_key.to_string(),
        };
        let mut contents = serde_json::to_string(&record).map_err(|e| {
            DockershrinkError::ConfigWrite {
                path: self.path.clone(),
                source: io::Error::other(e),
            }
        })?;
        contents.push('\n');

        self.fs
            .write(&self.path, contents.as_bytes())
            .map_err(|source| DockershrinkError::ConfigWrite {
                path: self.path.clone(),
                source,
            })?;

        debug!("saved credential to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<String, DockershrinkError> {
        let contents = self.fs.read_to_string(&self.path).map_err(|e| {
            debug!("cannot read {}: {}", self.path.display(), e);
            DockershrinkError::ConfigMissing {
                path: self.path.clone(),
            }
        })?;

        let record: CredentialFile =
            serde_json::from_str(&contents).map_err(|source| DockershrinkError::ConfigParse {
                path: self.path.clone(),
                source,
            })?;

        if record.api_key.is_empty() {
            return Err(DockershrinkError::ConfigMissing {
                path: self.path.clone(),
            });
        }

        Ok(record.api_key)
    }
}

/// Keeps the credential in memory; nothing touches the disk
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    api_key: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with `api_key`
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Mutex::new(Some(api_key.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, api_key: &str) -> Result<(), DockershrinkError> {
        if api_key.is_empty() {
            return Err(DockershrinkError::MissingApiKey);
        }
        *self.api_key.lock() = Some(api_key.to_string());
        Ok(())
    }

    fn load(&self) -> Result<String, DockershrinkError> {
        self.api_key
            .lock()
            .clone()
            .ok_or_else(|| DockershrinkError::ConfigMissing {
                path: PathBuf::from(CREDENTIAL_FILE_NAME),
            })
    }
}
