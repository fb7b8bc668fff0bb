use std::path::{Path, PathBuf};

use godev_core::{application::ports::ToolLocator, domain::BuildInfo};
use tracing::debug;

use super::buildinfo::parse_build_info;

/// Finds tools on `PATH` with `which`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathToolLocator;

impl PathToolLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathToolLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(tool = name, error = %e, "Not found on PATH");
                None
            }
        }
    }

    fn build_info(&self, path: &Path) -> Option<BuildInfo> {
        let data = std::fs::read(path)
            .inspect_err(|e| debug!(path = %path.display(), error = %e, "Cannot read binary"))
            .ok()?;
        parse_build_info(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_is_not_located() {
        assert!(
            PathToolLocator
                .locate("godev-definitely-not-a-real-tool-7c1e")
                .is_none()
        );
    }

    #[test]
    fn unreadable_binary_has_no_build_info() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("fake");
        std::fs::write(&file, b"#!/bin/sh\necho hi\n").unwrap();
        assert!(PathToolLocator.build_info(&file).is_none());
        assert!(PathToolLocator.build_info(&dir.path().join("missing")).is_none());
    }
}
