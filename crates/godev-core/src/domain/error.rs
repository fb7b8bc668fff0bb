// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports carry them by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project path '{path}': {reason}")]
    InvalidProjectPath { path: String, reason: String },

    #[error("Invalid template manifest: {0}")]
    InvalidManifest(String),

    #[error("Duplicate destination in manifest: {path}")]
    DuplicateDestination { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Invalid placeholder '{token}': {reason}")]
    InvalidPlaceholder { token: String, reason: String },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("Invalid Go version '{value}'")]
    InvalidGoVersion { value: String },

    #[error("go.mod:{line}: {reason}")]
    ModuleParse { line: usize, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectPath { .. } => vec![
                "Pass a directory name, e.g. 'godev init myproject'".into(),
                "Or run 'godev init' inside an empty directory".into(),
            ],
            Self::InvalidManifest(_)
            | Self::DuplicateDestination { .. }
            | Self::AbsolutePathNotAllowed { .. } => vec![
                "The built-in project manifest is corrupted".into(),
                "Please report this issue at: https://github.com/thought2code/godev/issues".into(),
            ],
            Self::InvalidPlaceholder { token, .. } => vec![
                format!("A value supplied for the project contains the marker '{}'", token),
                "Choose a repository or directory name without template markers".into(),
            ],
            Self::InvalidGoVersion { value } => vec![
                format!("'{}' is not a Go version", value),
                "Go versions look like 1.22, 1.22.3 or go1.23rc1".into(),
            ],
            Self::ModuleParse { .. } => vec![
                "Check if the go.mod file is a valid Go module file".into(),
                "Run 'go mod edit -fmt' to normalise it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectPath { .. } | Self::InvalidPlaceholder { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidGoVersion { .. } | Self::ModuleParse { .. } => ErrorCategory::Parse,
            Self::InvalidManifest(_)
            | Self::DuplicateDestination { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
    Internal,
}
