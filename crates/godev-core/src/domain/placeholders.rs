//! Placeholder substitution.
//!
//! Templates carry literal markers such as `{{.ProjectName}}`. A
//! [`PlaceholderMap`] replaces every occurrence of each marker with its
//! resolved value, token by token, in sorted token order.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Replaced with the project directory's base name.
pub const PROJECT_NAME: &str = "{{.ProjectName}}";

/// Replaced with the resolved (or fallback) latest Go version, e.g. `1.25.5`.
pub const LATEST_GO_VERSION: &str = "{{.LatestGoVersion}}";

/// Replaced with the repository identifier, used as the Go module path.
pub const REPOSITORY: &str = "{{.Repository}}";

/// Literal token → replacement mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: BTreeMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three values every scaffolded project needs.
    pub fn for_project(project_name: &str, go_version: &str, repository: &str) -> Self {
        Self::new()
            .with(PROJECT_NAME, project_name)
            .with(LATEST_GO_VERSION, go_version)
            .with(REPOSITORY, repository)
    }

    /// Add or replace a token.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(token.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reject maps whose substitution would not be idempotent.
    ///
    /// Tokens must be non-empty, and no replacement may contain any token.
    pub fn validate(&self) -> Result<(), DomainError> {
        for token in self.values.keys() {
            if token.is_empty() {
                return Err(DomainError::InvalidPlaceholder {
                    token: token.clone(),
                    reason: "token cannot be empty".into(),
                });
            }
        }
        for (owner, value) in &self.values {
            if let Some(token) = self.values.keys().find(|t| value.contains(t.as_str())) {
                return Err(DomainError::InvalidPlaceholder {
                    token: token.clone(),
                    reason: format!("the value for '{owner}' contains it"),
                });
            }
        }
        Ok(())
    }

    /// Apply every substitution to a UTF-8 (or arbitrary) byte buffer.
    pub fn apply(&self, bytes: &[u8]) -> Vec<u8> {
        let mut out = bytes.to_vec();
        for (token, value) in &self.values {
            out = replace_all(&out, token.as_bytes(), value.as_bytes());
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn render(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for (token, value) in &self.values {
            out = out.replace(token.as_str(), value);
        }
        out
    }
}

fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return haystack.to_vec();
    }
    let mut out = Vec::with_capacity(haystack.len());
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            out.extend_from_slice(replacement);
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    out
}
