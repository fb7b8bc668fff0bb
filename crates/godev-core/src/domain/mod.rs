//! Core domain layer for godev.
//!
//! Pure types and rules: no filesystem, network, or process access. All I/O
//! goes through the ports defined in the application layer.
//!
//! - **Init**: [`ProjectTarget`], [`InitOutcome`], [`TemplateManifest`], [`PlaceholderMap`]
//! - **Versions**: [`GoVersion`], [`ResolvedVersion`], [`ModuleFile`]
//! - **Doctor**: [`DiagnosticCheck`], [`DoctorReport`], [`BuildInfo`]
//! - **Tasks**: [`CommandSpec`] plans for lint, test, and tool installation

pub mod common;
pub mod diagnostics;
pub mod error;
pub mod manifest;
pub mod module_file;
pub mod placeholders;
pub mod project;
pub mod tooling;
pub mod version;

mod validation;

pub use common::RelativePath;
pub use diagnostics::{BuildInfo, DiagnosticCheck, DoctorReport};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{GO_PROJECT_MANIFEST, MANIFEST_VERSION, TemplateManifest};
pub use module_file::ModuleFile;
pub use placeholders::PlaceholderMap;
pub use project::{
    ExistingDirPolicy, InitOutcome, ProjectTarget, is_affirmative, normalize_repository,
};
pub use tooling::{
    CommandOutput, CommandSpec, RECOMMENDED_TOOLS, RecommendedTool, TestOptions,
};
pub use validation::DomainValidator;
pub use version::{
    EndpointFailure, FALLBACK_GO_VERSION, GoVersion, ResolvedVersion, VersionOrigin,
    parse_version_body,
};
