//! Runs external programs with `std::process`.

use std::path::PathBuf;
use std::process::Command;

use godev_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutput, CommandSpec},
    error::GodevResult,
};
use tracing::{debug, instrument};

/// Blocks until the child exits and captures stdout followed by stderr.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    cwd: Option<PathBuf>,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command in `dir` instead of the process working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &CommandSpec) -> GodevResult<CommandOutput> {
        let program = which::which(&command.program).unwrap_or_else(|_| PathBuf::from(&command.program));

        let mut cmd = Command::new(program);
        cmd.args(&command.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| ApplicationError::CommandSpawn {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(status = ?output.status.code(), bytes = combined.len(), "Command exited");
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            output: combined,
        })
    }
}
