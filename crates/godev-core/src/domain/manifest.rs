//! Template manifest: which embedded template lands where.
//!
//! The manifest maps a template-source key (an identifier into the asset
//! store) to a destination path relative to the project root. Iteration is
//! ordered by key so that materialization is reproducible.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{common::RelativePath, error::DomainError};

/// Bumped whenever [`GO_PROJECT_MANIFEST`] gains, loses, or moves a file.
pub const MANIFEST_VERSION: u32 = 1;

/// Files scaffolded into every new Go project, as `(template key, destination)`.
pub const GO_PROJECT_MANIFEST: &[(&str, &str)] = &[
    ("template/.vscode/extensions.json.tpl", ".vscode/extensions.json"),
    ("template/.vscode/launch.json.tpl", ".vscode/launch.json"),
    ("template/.vscode/settings.json.tpl", ".vscode/settings.json"),
    ("template/go.mod.tpl", "go.mod"),
    ("template/main.go.tpl", "main.go"),
    ("template/gitignore.tpl", ".gitignore"),
    ("template/golangci.yml.tpl", ".golangci.yml"),
    ("template/README.md.tpl", "README.md"),
];

/// Template-key → destination mapping with deterministic iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateManifest {
    version: u32,
    entries: BTreeMap<String, RelativePath>,
}

impl TemplateManifest {
    /// An empty manifest at the current [`MANIFEST_VERSION`].
    pub fn new() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// The manifest for a standard Go project.
    pub fn go_project() -> Result<Self, DomainError> {
        Self::from_pairs(GO_PROJECT_MANIFEST)
    }

    /// Build a manifest from `(key, destination)` pairs, validating as it goes.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, DomainError> {
        let mut manifest = Self::new();
        for (key, destination) in pairs {
            manifest.insert(*key, *destination)?;
        }
        manifest.validate()?;
        Ok(manifest)
    }

    /// Add one entry.
    ///
    /// Rejects empty or duplicate keys and destinations that are absolute or
    /// climb out of the project root.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        destination: &str,
    ) -> Result<(), DomainError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(DomainError::InvalidManifest(
                "template key cannot be empty".into(),
            ));
        }
        if self.entries.contains_key(&key) {
            return Err(DomainError::InvalidManifest(format!(
                "template key '{key}' listed twice"
            )));
        }
        let destination = RelativePath::try_new(destination).map_err(|p| {
            DomainError::AbsolutePathNotAllowed {
                path: p.display().to_string(),
            }
        })?;
        self.entries.insert(key, destination);
        Ok(())
    }

    /// Check the invariants that span entries.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidManifest("manifest is empty".into()));
        }

        let mut seen = HashSet::new();
        for destination in self.entries.values() {
            if !seen.insert(destination.as_path()) {
                return Err(DomainError::DuplicateDestination {
                    path: destination.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Entries ordered by template key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RelativePath)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Template keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
