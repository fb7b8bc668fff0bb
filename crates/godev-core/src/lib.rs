//! godev Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `godev`
//! Go development kit, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            godev-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InitService, DoctorService, Tasks)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, AssetStore, Prompter, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     godev-adapters (Infrastructure)     │
//! │ (LocalFilesystem, EmbeddedAssets, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (TemplateManifest, GoVersion, go.mod)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use godev_core::{
//!     application::{InitRequest, InitService, VersionResolver},
//!     domain::{ExistingDirPolicy, ProjectTarget},
//! };
//!
//! # fn adapters() -> (Box<dyn godev_core::application::ports::Filesystem>,
//! #                   Box<dyn godev_core::application::ports::AssetStore>,
//! #                   Box<dyn godev_core::application::ports::VersionSource>,
//! #                   Box<dyn godev_core::application::ports::Prompter>) { unimplemented!() }
//! let (filesystem, assets, source, prompter) = adapters();
//! let resolver = VersionResolver::with_default_endpoints(source);
//! let service = InitService::new(filesystem, assets, resolver, prompter);
//!
//! let target = ProjectTarget::resolve(Some("myproject".as_ref()), "/work".as_ref()).unwrap();
//! let report = service.init(&InitRequest::new(target, ExistingDirPolicy::Overwrite)).unwrap();
//! println!("{} files written", report.files.len());
//! ```

// Pure business logic
pub mod domain;

// Orchestration logic and ports
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DoctorService, InitReport, InitRequest, InitService, TaskService, TemplateMaterializer,
        VersionResolver,
        ports::{
            AssetStore, CommandRunner, EventSink, Filesystem, Prompter, ToolLocator, Toolchain,
            VersionSource,
        },
    };
    pub use crate::domain::{
        CommandSpec, DiagnosticCheck, DoctorReport, ExistingDirPolicy, GoVersion, InitOutcome,
        ModuleFile, PlaceholderMap, ProjectTarget, ResolvedVersion, TemplateManifest,
    };
    pub use crate::error::{GodevError, GodevResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
