//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GODEV_*` environment variables, `__` between nested keys
//!    (`GODEV_VERSION__TIMEOUT_SECS=10`), lists comma separated
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use godev_core::{
    application::services::version_resolver::default_endpoints,
    domain::{ExistingDirPolicy, version::DEFAULT_VERSION_TIMEOUT_SECS},
};

const ENV_PREFIX: &str = "GODEV";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Latest-version lookup.
    pub version: VersionConfig,
    /// `godev init` behaviour.
    pub init: InitConfig,
    /// `godev doctor` behaviour.
    pub doctor: DoctorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Tried in order; the compiled-in fallback is used when all fail.
    pub endpoints: Vec<String>,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitConfig {
    /// What to do with a non-empty directory once the user confirms.
    pub existing_dir: ExistingDirPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorConfig {
    /// Module descriptor, relative to the working directory.
    pub module_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: VersionConfig {
                endpoints: default_endpoints(),
                timeout_secs: DEFAULT_VERSION_TIMEOUT_SECS,
            },
            init: InitConfig {
                existing_dir: ExistingDirPolicy::default(),
            },
            doctor: DoctorConfig {
                module_file: PathBuf::from("go.mod"),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let file = File::from(Self::active_path(config_file).as_path())
            .format(FileFormat::Toml)
            .required(config_file.is_some());

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("version.endpoints")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.timeout_secs == 0 {
            bail!("version.timeout_secs must be greater than zero");
        }
        if let Some(blank) = self.version.endpoints.iter().find(|e| e.trim().is_empty()) {
            bail!("version.endpoints contains a blank entry: {blank:?}");
        }
        if self.doctor.module_file.as_os_str().is_empty() {
            bail!("doctor.module_file must not be empty");
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.godev.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "thought2code", "godev")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".godev.toml"))
    }

    /// The file this invocation reads: `--config` when given.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Dotted-key lookup used by `godev config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "version.endpoints" => self.version.endpoints.join(","),
            "version.timeout_secs" => self.version.timeout_secs.to_string(),
            "init.existing_dir" => self.init.existing_dir.to_string(),
            "doctor.module_file" => self.doctor.module_file.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`Self::get`].
    pub const KEYS: &'static [&'static str] = &[
        "version.endpoints",
        "version.timeout_secs",
        "init.existing_dir",
        "doctor.module_file",
        "output.no_color",
    ];
}
