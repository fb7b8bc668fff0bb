//! Application layer for godev.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (init, doctor, lint/test/tools)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use services::{
    DoctorService, InitReport, InitRequest, InitService, TaskService, TemplateMaterializer,
    VersionResolver,
};

pub use ports::{
    AssetStore, CommandRunner, Event, EventSink, Filesystem, NoopEvents, Prompter, ToolLocator,
    Toolchain, VersionSource,
};

pub use error::ApplicationError;
