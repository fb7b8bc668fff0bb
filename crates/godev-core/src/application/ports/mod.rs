//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `godev-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`, `AssetStore`: project tree and embedded templates
//!   - `Prompter`: interactive questions
//!   - `VersionSource`, `Toolchain`, `ToolLocator`: Go environment queries
//!   - `CommandRunner`: external processes
//!   - `EventSink`: progress reporting
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    AssetStore, CommandRunner, Event, EventSink, Filesystem, NoopEvents, Prompter, ToolLocator,
    Toolchain, VersionSource,
};
