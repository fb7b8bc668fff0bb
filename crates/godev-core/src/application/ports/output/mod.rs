//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `godev-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{BuildInfo, CommandOutput, CommandSpec, ResolvedVersion};
use crate::error::GodevResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `godev_adapters::filesystem::LocalFilesystem` (production)
/// - `godev_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether anything exists at `path`. "Not found" is `Ok(false)`.
    fn exists(&self, path: &Path) -> GodevResult<bool>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> GodevResult<bool>;

    /// Whether the directory has no direct entries. Fails if unreadable.
    fn is_empty(&self, path: &Path) -> GodevResult<bool>;

    /// Recursively remove `path`; no-op when absent.
    fn remove_tree_if_exists(&self, path: &Path) -> GodevResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GodevResult<()>;

    /// Create or truncate a file with `content`.
    fn write_file(&self, path: &Path, content: &[u8]) -> GodevResult<()>;

    fn read_to_string(&self, path: &Path) -> GodevResult<String>;
}

/// Read-only store of template sources, keyed by manifest key.
#[cfg_attr(test, mockall::automock)]
pub trait AssetStore: Send + Sync {
    /// Fails with `ApplicationError::TemplateNotFound` for unknown keys.
    fn read_asset(&self, key: &str) -> GodevResult<Vec<u8>>;
}

/// Port for interactive questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Show `question` and return one line without its terminator.
    ///
    /// Fails with `ApplicationError::EndOfInput` when input is closed.
    fn ask(&self, question: &str) -> GodevResult<String>;
}

/// Fetches the body of a version endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait VersionSource: Send + Sync {
    fn fetch(&self, url: &str) -> GodevResult<String>;
}

/// Finds executables and reads their embedded Go build info.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// `None` when the binary carries no readable Go build info.
    fn build_info(&self, path: &Path) -> Option<BuildInfo>;
}

/// The locally installed Go toolchain.
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// Raw `go env GOVERSION` output, e.g. `go1.22.3`.
    fn installed_version(&self) -> GodevResult<String>;
}

/// Runs external programs in the working directory.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run to completion and capture combined output.
    ///
    /// A non-zero exit is `Ok` with `success == false`; only a failure to
    /// start the program is an error.
    fn run(&self, command: &CommandSpec) -> GodevResult<CommandOutput>;
}

/// Progress notifications emitted while a use case runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DirectoryCreated { path: PathBuf },
    DirectoryReset { path: PathBuf },
    ResolvingVersion,
    VersionResolved { version: ResolvedVersion },
    FileWritten { path: PathBuf },
    CommandStarted { command: CommandSpec },
    CommandFinished { command: CommandSpec, output: CommandOutput },
}

/// Receives [`Event`]s. Rendering is up to the implementor.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &Event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEvents;

impl EventSink for NoopEvents {
    fn emit(&self, _event: &Event) {}
}
