//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use godev_core::{
    application::{ApplicationError, ports::Filesystem},
    error::GodevResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    unwritable: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write at or below `path` fail.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unwritable
            .insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .files
            .get(path)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> GodevResult<bool> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> GodevResult<bool> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.directories.contains(path))
    }

    fn is_empty(&self, path: &Path) -> GodevResult<bool> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        if !inner.directories.contains(path) {
            return Err(not_found(path));
        }
        let child = |p: &PathBuf| p.parent() == Some(path);
        Ok(!inner.directories.iter().any(child) && !inner.files.keys().any(child))
    }

    fn remove_tree_if_exists(&self, path: &Path) -> GodevResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> GodevResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::Filesystem {
                    path: current,
                    reason: "File exists".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GodevResult<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if inner.unwritable.iter().any(|p| path.starts_with(p)) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> GodevResult<String> {
        self.read_file(path).ok_or_else(|| not_found(path))
    }
}

fn not_found(path: &Path) -> godev_core::error::GodevError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}
