//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialize a project" or "check the toolchain".

pub mod doctor_service;
pub mod init_service;
pub mod materializer;
pub mod task_service;
pub mod version_resolver;

pub use doctor_service::DoctorService;
pub use init_service::{InitReport, InitRequest, InitService};
pub use materializer::TemplateMaterializer;
pub use task_service::TaskService;
pub use version_resolver::VersionResolver;
