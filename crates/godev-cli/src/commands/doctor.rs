//! `godev doctor` - advisory environment checks.

use tracing::instrument;

use godev_core::domain::DoctorReport;

use crate::{cli::OutputFormat, config::AppConfig, error::CliResult, output::OutputManager};

/// Run every check and print the report. Failed checks do not fail the
/// command.
#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let report = super::doctor_service(config).run();
    render(&report, output)
}

pub(crate) fn render(report: &DoctorReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    output.header("Checking the Go development environment")?;
    for check in &report.checks {
        output.check(check)?;
    }

    let failed = report.failed().count();
    if failed == 0 {
        output.success("All checks passed")?;
    } else {
        output.warning(&format!(
            "{failed} of {} checks failed",
            report.checks.len()
        ))?;
    }
    Ok(())
}
