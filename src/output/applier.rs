//! Writes optimised files returned by the service

use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::DockershrinkError;
use crate::infra::{FileSystem, RealFileSystem};

/// Directory, relative to the project root, that receives optimised files
pub const OUTPUT_DIR: &str = "dockershrink.optimised";

/// File whose content arrives as a JSON document rather than text
const MANIFEST_FILE: &str = "package.json";

/// Writes the service's `modified_project` mapping to disk
pub struct ResultApplier<FS: FileSystem = RealFileSystem> {
    root: PathBuf,
    fs: FS,
}

impl ResultApplier<RealFileSystem> {
    /// Applier backed by the real filesystem
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, RealFileSystem)
    }
}

impl<FS: FileSystem> ResultApplier<FS> {
    /// Applier with a custom filesystem implementation
    pub fn with_fs(root: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    /// Where files are written
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// Write every returned file, in file name order
    ///
    /// Every file name is checked before the output directory is created.
    /// Writing stops at the first failure; files written before it stay on
    /// disk.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dockershrink::output::ResultApplier;
    /// use serde_json::json;
    /// use std::collections::BTreeMap;
    ///
    /// let mut files = BTreeMap::new();
    /// files.insert("Dockerfile".to_string(), json!("FROM node:20-alpine\n"));
    ///
    /// let written = ResultApplier::new(".").apply(&files)?;
    /// assert_eq!(written.len(), 1);
    /// # Ok::<(), dockershrink::error::DockershrinkError>(())
    /// ```
    pub fn apply(&self, files: &BTreeMap<String, Value>) -> Result<Vec<PathBuf>, DockershrinkError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let output_dir = self.output_dir();
        let mut targets = Vec::with_capacity(files.len());
        for (filename, value) in files {
            targets.push((output_path(&output_dir, filename)?, filename, value));
        }
        self.ensure_dir(&output_dir)?;

        let mut written = Vec::with_capacity(targets.len());
        for (path, filename, value) in targets {
            let content = render_content(filename, value)?;
            self.fs
                .write(&path, content.as_bytes())
                .map_err(|source| DockershrinkError::OutputWrite {
                    path: path.clone(),
                    source,
                })?;
            debug!("wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), DockershrinkError> {
        if self.fs.exists(dir) {
            return Ok(());
        }
        match self.fs.create_dir(dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(DockershrinkError::OutputWrite {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

/// Location of `filename` inside `output_dir`
///
/// File names must stay inside the output directory: absolute paths, drive
/// prefixes and `..` are rejected before anything is written.
///
/// # Examples
///
/// ```
/// use dockershrink::output::applier::output_path;
/// use std::path::Path;
///
/// let dir = Path::new("dockershrink.optimised");
/// assert_eq!(output_path(dir, "Dockerfile")?, dir.join("Dockerfile"));
/// assert!(output_path(dir, "../Dockerfile").is_err());
/// # Ok::<(), dockershrink::error::DockershrinkError>(())
/// ```
pub fn output_path(output_dir: &Path, filename: &str) -> Result<PathBuf, DockershrinkError> {
    let relative = Path::new(filename);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes || filename.is_empty() {
        return Err(DockershrinkError::OutputWrite {
            path: relative.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("file name {:?} is outside {}", filename, OUTPUT_DIR),
            ),
        });
    }
    Ok(output_dir.join(relative))
}

/// Turn one returned value into file content
///
/// `package.json` is pretty-printed with two-space indentation. Every other
/// file must be a JSON string and is written as-is.
pub fn render_content(filename: &str, value: &Value) -> Result<String, DockershrinkError> {
    let parse_error = |source| DockershrinkError::ResponseParse {
        context: format!("content for {}", filename),
        source,
    };

    if filename == MANIFEST_FILE {
        let document = match value {
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(document) => document,
                Err(_) => return Ok(raw.clone()),
            },
            other => other.clone(),
        };
        let mut pretty = serde_json::to_string_pretty(&document).map_err(parse_error)?;
        pretty.push('\n');
        return Ok(pretty);
    }

    serde_json::from_value::<String>(value.clone()).map_err(parse_error)
}
