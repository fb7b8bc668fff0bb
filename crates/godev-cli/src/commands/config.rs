//! `godev config` - inspect and create the configuration file.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let path = AppConfig::active_path(global.config.as_ref());

    match cmd {
        ConfigCommands::Init { force } => init(&path, force, output)?,

        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or(CliError::UnknownConfigKey { key })?;
            output.value(&value)?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(config)?;
            } else {
                output.header(&format!("# {}", path.display()))?;
                let serialised =
                    toml::to_string_pretty(config).with_cli_context(|| "Failed to serialise config")?;
                output.value(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => output.value(&path.display().to_string())?,
    }

    Ok(())
}

/// Write the defaults to `path`, refusing to clobber without `--force`.
fn init(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            debug: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");

        init(&path, false, &quiet_output()).unwrap();

        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn init_keeps_existing_file_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        init(&path, false, &quiet_output()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init(&path, true, &quiet_output()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[version]"));
    }
}
