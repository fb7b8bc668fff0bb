//! Doctor check results.

use std::fmt;

use serde::Serialize;

pub const MODULE_FILE_CHECK: &str = "Go module file";
pub const GO_VERSION_CHECK: &str = "Go version";

/// Name of the per-tool check, e.g. `Go tools gofumpt`.
pub fn tool_check_name(tool: &str) -> String {
    format!("Go tools {tool}")
}

/// Outcome of one advisory check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticCheck {
    pub name: String,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

impl DiagnosticCheck {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            advice: None,
        }
    }

    pub fn fail(
        name: impl Into<String>,
        message: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            advice: Some(advice.into()),
        }
    }
}

/// All checks, in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub checks: Vec<DiagnosticCheck>,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &DiagnosticCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn get(&self, name: &str) -> Option<&DiagnosticCheck> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// Versions recorded in a Go binary's embedded build info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Toolchain that built the binary, e.g. `go1.25.0`.
    pub go_version: String,
    /// Version of the main module, e.g. `v0.9.2` or `(devel)`.
    pub main_version: String,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} built with {}", self.main_version, self.go_version)
    }
}
