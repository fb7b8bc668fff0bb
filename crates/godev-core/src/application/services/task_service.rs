//! Lint, unit test, and tool installation runs.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Event, EventSink, Filesystem, NoopEvents, Prompter},
    },
    domain::{
        CommandOutput, CommandSpec, RecommendedTool, TestOptions, is_affirmative,
        tooling::{self, COVER_HTML, COVERAGE_DIR},
    },
    error::GodevResult,
};

pub struct TaskService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    events: Box<dyn EventSink>,
    os: &'static str,
}

impl TaskService {
    pub fn new(runner: Box<dyn CommandRunner>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            runner,
            filesystem,
            events: Box::new(NoopEvents),
            os: std::env::consts::OS,
        }
    }

    pub fn with_events(mut self, events: Box<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Override the platform used to pick the report opener.
    pub fn with_os(mut self, os: &'static str) -> Self {
        self.os = os;
        self
    }

    /// Formatters, linter, then `go mod tidy`; stops at the first failure.
    #[instrument(skip_all)]
    pub fn lint(&self) -> GodevResult<()> {
        for command in tooling::lint_plan() {
            self.execute(&command)?;
        }
        info!("Lint finished");
        Ok(())
    }

    /// Reset `coverage/`, run `go test`, and for `--html` render and open
    /// the report. Returns the report path when one was generated.
    #[instrument(skip_all, fields(verbose = options.verbose, cover = options.cover, html = options.html))]
    pub fn unit_test(&self, options: TestOptions) -> GodevResult<Option<PathBuf>> {
        let coverage = Path::new(COVERAGE_DIR);
        self.filesystem.remove_tree_if_exists(coverage)?;
        self.filesystem.create_dir_all(coverage)?;

        for command in tooling::unit_test_plan(options) {
            self.execute(&command)?;
        }

        if !options.html {
            return Ok(None);
        }

        let opener = tooling::open_command(COVER_HTML, self.os);
        match self.runner.run(&opener) {
            Ok(output) if output.success => {}
            Ok(output) => warn!(command = %opener, code = ?output.code, "Could not open coverage report"),
            Err(e) => warn!(command = %opener, error = %e, "Could not open coverage report"),
        }
        Ok(Some(PathBuf::from(COVER_HTML)))
    }

    /// `go install <package>`, with `@latest` when no version is given.
    #[instrument(skip(self))]
    pub fn install_tool(&self, package: &str) -> GodevResult<()> {
        self.execute(&tooling::install_command(package)).map(|_| ())
    }

    /// Ask once, then install every tool at its pinned version.
    ///
    /// All installs are attempted; the error lists every tool that failed.
    /// Returns `false` when the user declined.
    #[instrument(skip_all, fields(tools = tools.len()))]
    pub fn install_recommended(
        &self,
        tools: &[RecommendedTool],
        prompter: &dyn Prompter,
        assume_yes: bool,
    ) -> GodevResult<bool> {
        if !assume_yes {
            let names: Vec<_> = tools.iter().map(|t| t.name).collect();
            let answer = prompter.ask(&format!(
                "Install recommended tools ({})? (y/N) ",
                names.join(", ")
            ))?;
            if !is_affirmative(&answer) {
                info!("Tool installation declined");
                return Ok(false);
            }
        }

        let failed: Vec<String> = tools
            .iter()
            .filter(|tool| {
                self.execute(&tool.install_command())
                    .inspect_err(|e| warn!(tool = tool.name, error = %e, "Install failed"))
                    .is_err()
            })
            .map(|tool| tool.name.to_owned())
            .collect();

        if failed.is_empty() {
            Ok(true)
        } else {
            Err(ApplicationError::ToolInstall { failed }.into())
        }
    }

    fn execute(&self, command: &CommandSpec) -> GodevResult<CommandOutput> {
        self.events.emit(&Event::CommandStarted {
            command: command.clone(),
        });
        let output = self.runner.run(command)?;
        self.events.emit(&Event::CommandFinished {
            command: command.clone(),
            output: output.clone(),
        });

        if output.success {
            Ok(output)
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: output.code,
            }
            .into())
        }
    }
}
