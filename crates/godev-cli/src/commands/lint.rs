//! `godev lint` - doctor, then formatters, linter and `go mod tidy`.

use tracing::{info, instrument};

use godev_adapters::{LocalFilesystem, SystemCommandRunner};
use godev_core::application::TaskService;

use crate::{
    config::AppConfig, error::CliResult, output::OutputManager, progress::ConsoleEvents,
};

#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let report = super::doctor_service(config).run();
    super::doctor::render(&report, output)?;
    if !report.all_passed() {
        info!("Continuing with lint despite failed checks");
    }
    output.print("")?;

    TaskService::new(
        Box::new(SystemCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_events(Box::new(ConsoleEvents::new(output.clone())))
    .lint()?;

    output.success("Lint finished")?;
    Ok(())
}
