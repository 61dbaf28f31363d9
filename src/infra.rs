//! Infrastructure traits for abstracting I/O operations.
//!
//! The locator, the result applier and the credential store only touch the
//! disk through [`FileSystem`], so tests can swap in an in-memory version.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory level. Parents must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Write a slice of bytes to a file, replacing any previous content.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}
