//! Project input discovery
//!
//! Resolves the Dockerfile, `.dockerignore` and `package.json` of a NodeJS
//! project. An unreadable file is reported as "not found" and never fails the
//! run; a `package.json` that exists but is not valid JSON does.

use log::{debug, warn};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::OptimizeOptions;
use crate::error::DockershrinkError;
use crate::infra::{FileSystem, RealFileSystem};

/// Directory searched for `package.json` when the project root has none
pub const MANIFEST_FALLBACK_DIR: &str = "src";

/// The three build-context files sent to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Dockerfile
    Dockerfile,
    /// .dockerignore
    Dockerignore,
    /// package.json
    PackageJson,
}

impl InputKind {
    /// All kinds, in the order they are reported
    pub const ALL: [InputKind; 3] = [Self::Dockerfile, Self::Dockerignore, Self::PackageJson];

    /// Default file name, also used as the request field name
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Dockerfile => "Dockerfile",
            Self::Dockerignore => ".dockerignore",
            Self::PackageJson => "package.json",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A resolved input file
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFile<T = String> {
    /// Which input this is
    pub kind: InputKind,
    /// Path that was used, as shown to the user
    pub path: PathBuf,
    /// File content; `None` when the file could not be read
    pub content: Option<T>,
}

impl<T> ProjectFile<T> {
    /// True if the file was read
    pub fn found(&self) -> bool {
        self.content.is_some()
    }

    /// One-line report of what was picked up
    pub fn describe(&self) -> String {
        if self.found() {
            format!("- Using {}", self.path.display())
        } else {
            format!("- No {} found in the default paths", self.kind)
        }
    }
}

/// Everything located for one `optimize` run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInputs {
    /// Dockerfile, raw text
    pub dockerfile: ProjectFile,
    /// .dockerignore, raw text
    pub dockerignore: ProjectFile,
    /// package.json, validated JSON document
    pub package_json: ProjectFile<Value>,
}

impl ProjectInputs {
    /// Report lines for each input, in [`InputKind::ALL`] order
    pub fn describe(&self) -> Vec<String> {
        vec![
            self.dockerfile.describe(),
            self.dockerignore.describe(),
            self.package_json.describe(),
        ]
    }
}

/// Finds project input files relative to a project root
pub struct FileLocator<FS: FileSystem = RealFileSystem> {
    root: PathBuf,
    fs: FS,
}

impl FileLocator<RealFileSystem> {
    /// Locator backed by the real filesystem
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dockershrink::config::OptimizeOptions;
    /// use dockershrink::project::FileLocator;
    ///
    /// let inputs = FileLocator::new(".").locate_all(&OptimizeOptions::default())?;
    /// for line in inputs.describe() {
    ///     println!("{}", line);
    /// }
    /// # Ok::<(), dockershrink::error::DockershrinkError>(())
    /// ```
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, RealFileSystem)
    }
}

impl<FS: FileSystem> FileLocator<FS> {
    /// Locator with a custom filesystem implementation
    pub fn with_fs(root: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    /// Pick the path to read for `kind`
    ///
    /// An explicit path is used verbatim. Otherwise the default name in the
    /// project root is used, except that a missing root `package.json` falls
    /// back to `src/package.json`.
    pub fn resolve_path(&self, kind: InputKind, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        let default = PathBuf::from(kind.file_name());
        if kind == InputKind::PackageJson && !self.fs.exists(&self.root.join(&default)) {
            return Path::new(MANIFEST_FALLBACK_DIR).join(kind.file_name());
        }
        default
    }

    /// Locate a raw-text input
    pub fn locate_text(&self, kind: InputKind, explicit: Option<&Path>) -> ProjectFile {
        let path = self.resolve_path(kind, explicit);
        let content = match self.fs.read_to_string(&self.root.join(&path)) {
            Ok(content) => {
                debug!("read {} from {}", kind, path.display());
                Some(content)
            }
            Err(e) => {
                debug!("{} not available at {}: {}", kind, path.display(), e);
                None
            }
        };

        ProjectFile {
            kind,
            path,
            content,
        }
    }

    /// Locate `package.json` and check that it is valid JSON
    pub fn locate_manifest(
        &self,
        explicit: Option<&Path>,
    ) -> Result<ProjectFile<Value>, DockershrinkError> {
        let text = self.locate_text(InputKind::PackageJson, explicit);
        let content = match text.content {
            Some(raw) => Some(serde_json::from_str::<Value>(&raw).map_err(|source| {
                DockershrinkError::ManifestParse {
                    path: text.path.clone(),
                    source,
                }
            })?),
            None => None,
        };

        Ok(ProjectFile {
            kind: text.kind,
            path: text.path,
            content,
        })
    }

    /// Locate all three inputs
    pub fn locate_all(&self, options: &OptimizeOptions) -> Result<ProjectInputs, DockershrinkError> {
        let inputs = ProjectInputs {
            dockerfile: self.locate_text(InputKind::Dockerfile, options.dockerfile.as_deref()),
            dockerignore: self
                .locate_text(InputKind::Dockerignore, options.dockerignore.as_deref()),
            package_json: self.locate_manifest(options.package_json.as_deref())?,
        };

        if !inputs.dockerfile.found() {
            warn!("no Dockerfile found, continuing with partial inputs");
        }

        Ok(inputs)
    }
}
