//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, GodevError};

/// Errors that occur while running a use case.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The asset store has no template under this key.
    #[error("Template not found: {key}")]
    TemplateNotFound { key: String },

    /// Writing one manifest entry failed; earlier files stay on disk.
    #[error("Failed to materialize template '{key}': {cause}")]
    Materialize { key: String, cause: Box<GodevError> },

    /// The target exists but is a file (or something else that is not a directory).
    #[error("{path} exists and is not a directory")]
    NotADirectory { path: PathBuf },

    /// Standard input closed before an answer was read.
    #[error("No input: standard input was closed before an answer was given")]
    EndOfInput,

    /// Reading or writing the prompt failed.
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    /// A version endpoint could not be reached or returned an error status.
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// Reading the installed toolchain's version failed.
    #[error("Go toolchain unavailable: {reason}")]
    Toolchain { reason: String },

    /// The program could not be started at all.
    #[error("Failed to run '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    /// The program ran and exited unsuccessfully.
    #[error("'{command}' failed{}", code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    CommandFailed { command: String, code: Option<i32> },

    /// At least one tool in a batch install failed.
    #[error("Failed to install: {}", failed.join(", "))]
    ToolInstall { failed: Vec<String> },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateNotFound { key } => vec![
                format!("No embedded template named '{}'", key),
                "The binary may be corrupted; reinstall godev".into(),
            ],
            Self::Materialize { cause, .. } => {
                let mut s = vec!["Files written before the failure were left in place".into()];
                s.extend(cause.suggestions());
                s
            }
            Self::NotADirectory { path } => vec![
                format!("Remove or rename {}", path.display()),
                "Or choose a different project name".into(),
            ],
            Self::EndOfInput => vec![
                "Run godev in an interactive terminal".into(),
                "Or pass --yes and --repo to skip the prompts".into(),
            ],
            Self::Prompt { .. } => vec!["Check that the terminal is readable".into()],
            Self::Network { .. } => vec![
                "Check your network connection".into(),
                "Set version.endpoints in the config to use a mirror".into(),
            ],
            Self::Toolchain { .. } => vec![
                "Install Go from https://golang.org/dl/".into(),
                "Ensure the 'go' binary is on your PATH".into(),
            ],
            Self::CommandSpawn { command, .. } => {
                let program = command.split_whitespace().next().unwrap_or(command);
                vec![
                    format!("Ensure '{}' is installed and on your PATH", program),
                    "Run 'godev doctor' to check your environment".into(),
                    "Run 'godev tools install' to install the recommended tools".into(),
                ]
            }
            Self::CommandFailed { .. } => vec!["See the command output above".into()],
            Self::ToolInstall { .. } => vec![
                "See the 'go install' output above".into(),
                "Check your network connection and GOPROXY setting".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Materialize { cause, .. } => cause.category(),
            Self::NotADirectory { .. } | Self::EndOfInput => ErrorCategory::Validation,
            Self::CommandSpawn { .. } | Self::Toolchain { .. } => ErrorCategory::NotFound,
            Self::CommandFailed { .. } | Self::ToolInstall { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::Prompt { .. } | Self::Network { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_names_template_and_cause() {
        let err = ApplicationError::Materialize {
            key: "template/go.mod.tpl".into(),
            cause: Box::new(
                ApplicationError::Filesystem {
                    path: PathBuf::from("/p/go.mod"),
                    reason: "read-only".into(),
                }
                .into(),
            ),
        };
        let msg = err.to_string();
        assert!(msg.contains("template/go.mod.tpl"));
        assert!(msg.contains("read-only"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn command_failed_shows_exit_code() {
        let err = ApplicationError::CommandFailed {
            command: "go test ./...".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "'go test ./...' failed with exit code 1");

        let killed = ApplicationError::CommandFailed {
            command: "go test ./...".into(),
            code: None,
        };
        assert_eq!(killed.to_string(), "'go test ./...' failed");
    }

    #[test]
    fn missing_program_suggests_tools_install() {
        let err = ApplicationError::CommandSpawn {
            command: "gofumpt -w .".into(),
            reason: "not found".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("'gofumpt'")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
