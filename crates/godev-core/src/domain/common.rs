use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be **relative** and free of `..`.
///
/// Manifest destinations are joined onto the project root; an absolute path
/// or a parent component would let a template escape it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Validate and normalise a destination path.
    ///
    /// `.` components are dropped, so `./go.mod` and `go.mod` compare equal.
    /// Absolute paths, `..`, and paths with nothing left are returned as the
    /// error.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, PathBuf> {
        let path = path.into();
        match normalize(&path) {
            Some(normalized) => Ok(Self(normalized)),
            None => Err(path),
        }
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

fn normalize(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (!normalized.as_os_str().is_empty()).then_some(normalized)
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
