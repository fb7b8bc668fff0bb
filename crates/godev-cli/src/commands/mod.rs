//! Command handlers.
//!
//! Each handler wires adapters into a core service, runs it, and renders the
//! result. No business logic lives here.

pub mod completions;
pub mod config;
pub mod doctor;
pub mod init;
pub mod lint;
pub mod tools;

use std::path::PathBuf;

use godev_adapters::{GoToolchain, LocalFilesystem, PathToolLocator, SystemCommandRunner};
use godev_core::application::DoctorService;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|source| CliError::CurrentDir { source })
}

/// Doctor wired to the local machine, shared by `doctor` and `lint`.
fn doctor_service(config: &AppConfig) -> DoctorService {
    DoctorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoToolchain::new(SystemCommandRunner::new())),
        Box::new(PathToolLocator::new()),
    )
    .with_module_file(config.doctor.module_file.clone())
}
