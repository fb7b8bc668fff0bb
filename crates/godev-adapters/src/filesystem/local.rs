//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use godev_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GodevError, GodevResult},
};
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> GodevResult<bool> {
        path.try_exists()
            .map_err(|e| map_io_error(path, e, "check existence of"))
    }

    fn is_dir(&self, path: &Path) -> GodevResult<bool> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(map_io_error(path, e, "stat")),
        }
    }

    fn is_empty(&self, path: &Path) -> GodevResult<bool> {
        let mut entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        match entries.next() {
            None => Ok(true),
            Some(Ok(_)) => Ok(false),
            Some(Err(e)) => Err(map_io_error(path, e, "read directory")),
        }
    }

    fn remove_tree_if_exists(&self, path: &Path) -> GodevResult<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(map_io_error(path, e, "stat")),
        };

        debug!(path = %path.display(), "Removing");
        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| map_io_error(path, e, "remove"))
    }

    fn create_dir_all(&self, path: &Path) -> GodevResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GodevResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> GodevResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GodevError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
