//! `godev tools install`

use tracing::instrument;

use godev_adapters::{LocalFilesystem, SystemCommandRunner};
use godev_core::{application::TaskService, domain::RECOMMENDED_TOOLS};

use crate::{
    cli::{InstallArgs, ToolsCommands},
    error::CliResult,
    output::OutputManager,
    progress::ConsoleEvents,
    prompt::LinePrompter,
};

pub fn execute(cmd: ToolsCommands, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ToolsCommands::Install(args) => install(args, output),
    }
}

#[instrument(skip_all, fields(package = ?args.package))]
fn install(args: InstallArgs, output: &OutputManager) -> CliResult<()> {
    let service = TaskService::new(
        Box::new(SystemCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_events(Box::new(ConsoleEvents::new(output.clone())));

    if let Some(package) = args.package {
        service.install_tool(&package)?;
        return Ok(());
    }

    if service.install_recommended(RECOMMENDED_TOOLS, &LinePrompter::stdio(), args.yes)? {
        output.success(&format!(
            "Installed {} recommended tools",
            RECOMMENDED_TOOLS.len()
        ))?;
    } else {
        output.warning("Cancelled, nothing was installed")?;
    }
    Ok(())
}
