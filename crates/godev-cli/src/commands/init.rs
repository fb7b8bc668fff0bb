//! Implementation of the `godev init` command.
//!
//! Responsibility: translate CLI arguments into an `InitRequest`, call the
//! core init service, and display results.

use std::time::Duration;

use tracing::{debug, instrument};

use godev_adapters::{EmbeddedAssets, HttpVersionSource, LocalFilesystem};
use godev_core::{
    application::{InitReport, InitRequest, InitService, VersionResolver},
    domain::ProjectTarget,
    error::GodevError,
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    progress::ConsoleEvents,
    prompt::LinePrompter,
};

/// Execute the `godev init` command.
///
/// A declined confirmation is not an error: it prints a notice and exits 0.
#[instrument(skip_all, fields(project = ?args.name))]
pub fn execute(args: InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let cwd = super::current_dir()?;
    let target = ProjectTarget::resolve(args.name.as_deref(), &cwd).map_err(GodevError::from)?;
    debug!(root = %target.root().display(), name = target.name(), "Target resolved");

    let source = HttpVersionSource::new(Duration::from_secs(config.version.timeout_secs))?;
    let resolver = VersionResolver::new(Box::new(source), config.version.endpoints.clone());

    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(EmbeddedAssets::new()),
        resolver,
        Box::new(LinePrompter::stdio()),
    )
    .with_events(Box::new(ConsoleEvents::new(output.clone())));

    let mut request = InitRequest::new(target, config.init.existing_dir).assume_yes(args.yes);
    if let Some(repo) = args.repo {
        request = request.with_repository(repo);
    }

    let report = service.init(&request)?;
    if report.cancelled() {
        output.warning("Cancelled, no files were written")?;
        return Ok(());
    }

    summarize(&report, &cwd, output)?;
    Ok(())
}

fn summarize(report: &InitReport, cwd: &std::path::Path, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success(&format!(
        "Initialized Go project in {} ({} files)",
        report.root.display(),
        report.files.len()
    ))?;
    if let Some(repository) = &report.repository {
        output.info(&format!("Module path: {repository}"))?;
    }
    if let Some(version) = &report.go_version {
        output.info(&format!("Go version: {}", version.version))?;
    }

    output.print("")?;
    output.header("Next steps:")?;
    if report.root != cwd {
        output.print(&format!("  cd {}", report.root.display()))?;
    }
    output.print("  godev tools install")?;
    output.print("  godev doctor")?;
    Ok(())
}
