//! The installed Go toolchain.

use godev_core::{
    application::{ApplicationError, ports::{CommandRunner, Toolchain}},
    domain::CommandSpec,
    error::GodevResult,
};

/// Asks `go env GOVERSION` through a [`CommandRunner`].
pub struct GoToolchain<R> {
    runner: R,
}

impl<R: CommandRunner> GoToolchain<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> Toolchain for GoToolchain<R> {
    fn installed_version(&self) -> GodevResult<String> {
        let spec = CommandSpec::new("go", ["env", "GOVERSION"]);
        let output = self.runner.run(&spec).map_err(|e| ApplicationError::Toolchain {
            reason: e.to_string(),
        })?;

        let version = output.output.trim();
        if !output.success || version.is_empty() {
            return Err(ApplicationError::Toolchain {
                reason: format!("'{spec}' failed: {version}"),
            }
            .into());
        }
        Ok(version.to_owned())
    }
}
