//! Infrastructure adapters for godev.
//!
//! This crate implements the ports defined in `godev_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod assets;
pub mod filesystem;
pub mod process;
pub mod toolchain;
pub mod tools;
pub mod version_source;

// Re-export commonly used adapters
pub use assets::{EmbeddedAssets, MemoryAssets};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemCommandRunner;
pub use toolchain::GoToolchain;
pub use tools::PathToolLocator;
pub use version_source::HttpVersionSource;
