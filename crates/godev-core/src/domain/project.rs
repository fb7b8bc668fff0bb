//! Project target resolution and the init decision vocabulary.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Where a project is initialized and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    root: PathBuf,
    name: String,
}

impl ProjectTarget {
    /// Resolve the user's argument against `cwd`.
    ///
    /// `None` means the current directory. The result is absolute and
    /// lexically normalized (`.` dropped, `..` folded); no symlinks are
    /// followed. The project name is the final path component.
    pub fn resolve(requested: Option<&Path>, cwd: &Path) -> Result<Self, DomainError> {
        let joined = match requested {
            Some(p) if p.as_os_str().is_empty() => cwd.to_path_buf(),
            Some(p) if p.is_absolute() => p.to_path_buf(),
            Some(p) => cwd.join(p),
            None => cwd.to_path_buf(),
        };
        let root = normalize_lexically(&joined);

        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| DomainError::InvalidProjectPath {
                path: joined.display().to_string(),
                reason: "the path has no final component to use as a project name".into(),
            })?;

        Ok(Self { root, name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// The decision taken for the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The directory did not exist and was created.
    ProceedAsNewDirectory,
    /// The directory existed with no entries; no prompt was needed.
    ProceedInEmptyDirectory,
    /// The directory had content and the user agreed to continue.
    ProceedAfterConfirmation,
    /// The user declined; nothing was written.
    Cancelled,
    /// The target cannot be used.
    Failed(String),
}

impl InitOutcome {
    /// True when materialization should go ahead.
    pub fn proceeds(&self) -> bool {
        matches!(
            self,
            Self::ProceedAsNewDirectory
                | Self::ProceedInEmptyDirectory
                | Self::ProceedAfterConfirmation
        )
    }
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProceedAsNewDirectory => write!(f, "new directory"),
            Self::ProceedInEmptyDirectory => write!(f, "empty directory"),
            Self::ProceedAfterConfirmation => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// What to do with a non-empty directory once the user confirms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingDirPolicy {
    /// Keep unrelated files; manifest files are overwritten.
    #[default]
    Overwrite,
    /// Remove the whole tree and start from an empty directory.
    Reset,
}

impl fmt::Display for ExistingDirPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

impl std::str::FromStr for ExistingDirPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reset" => Ok(Self::Reset),
            other => Err(format!(
                "unknown existing-directory policy '{other}' (expected 'overwrite' or 'reset')"
            )),
        }
    }
}

/// Only a literal `Y` or `y` counts as yes. `yes`, `Y `, and the empty
/// answer do not.
pub fn is_affirmative(answer: &str) -> bool {
    answer == "Y" || answer == "y"
}

/// Turn whatever the user typed for the repository into a module path.
///
/// Empty input falls back to `default_name`. A `scheme://` prefix, trailing
/// slashes, and a trailing `.git` are removed.
pub fn normalize_repository(input: &str, default_name: &str) -> String {
    let mut repo = input.trim();
    if let Some((_, rest)) = repo.split_once("://") {
        repo = rest;
    }
    repo = repo.trim_end_matches('/');
    if let Some(stripped) = repo.strip_suffix(".git") {
        repo = stripped.trim_end_matches('/');
    }

    if repo.is_empty() {
        default_name.to_owned()
    } else {
        repo.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_name_against_cwd() {
        let t = ProjectTarget::resolve(Some(Path::new("demo")), Path::new("/work")).unwrap();
        assert_eq!(t.root(), Path::new("/work/demo"));
        assert_eq!(t.name(), "demo");
    }

    #[test]
    fn defaults_to_cwd() {
        let t = ProjectTarget::resolve(None, Path::new("/work/current")).unwrap();
        assert_eq!(t.root(), Path::new("/work/current"));
        assert_eq!(t.name(), "current");
    }

    #[test]
    fn folds_dot_components() {
        let t = ProjectTarget::resolve(Some(Path::new("./a/../b/.")), Path::new("/work")).unwrap();
        assert_eq!(t.root(), Path::new("/work/b"));
        assert_eq!(t.name(), "b");
    }

    #[test]
    fn absolute_argument_ignores_cwd() {
        let t = ProjectTarget::resolve(Some(Path::new("/srv/app")), Path::new("/work")).unwrap();
        assert_eq!(t.root(), Path::new("/srv/app"));
    }

    #[test]
    fn root_has_no_name() {
        let result = ProjectTarget::resolve(Some(Path::new("/")), Path::new("/work"));
        assert!(matches!(
            result,
            Err(DomainError::InvalidProjectPath { .. })
        ));
    }

    #[test]
    fn only_single_letter_y_is_affirmative() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y"));
        for answer in ["", "yes", "YES", "n", "N", " y", "y ", "Yy"] {
            assert!(!is_affirmative(answer), "{answer:?} must not be affirmative");
        }
    }

    #[test]
    fn repository_defaults_to_project_name() {
        assert_eq!(normalize_repository("", "demo"), "demo");
        assert_eq!(normalize_repository("   ", "demo"), "demo");
    }

    #[test]
    fn repository_strips_scheme() {
        assert_eq!(
            normalize_repository("https://github.com/acme/demo", "demo"),
            "github.com/acme/demo"
        );
        assert_eq!(
            normalize_repository("ssh://git.example.com/x", "demo"),
            "git.example.com/x"
        );
    }

    #[test]
    fn repository_strips_git_suffix_and_slashes() {
        assert_eq!(
            normalize_repository(" https://github.com/acme/demo.git/ ", "demo"),
            "github.com/acme/demo"
        );
        assert_eq!(normalize_repository("github.com/acme/demo/", "x"), "github.com/acme/demo");
    }

    #[test]
    fn scheme_only_falls_back() {
        assert_eq!(normalize_repository("https://", "demo"), "demo");
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Reset".parse::<ExistingDirPolicy>().unwrap(), ExistingDirPolicy::Reset);
        assert_eq!(
            "overwrite".parse::<ExistingDirPolicy>().unwrap(),
            ExistingDirPolicy::Overwrite
        );
        assert!("wipe".parse::<ExistingDirPolicy>().is_err());
        assert_eq!(ExistingDirPolicy::default(), ExistingDirPolicy::Overwrite);
    }

    #[test]
    fn only_proceed_outcomes_proceed() {
        assert!(InitOutcome::ProceedAsNewDirectory.proceeds());
        assert!(InitOutcome::ProceedAfterConfirmation.proceeds());
        assert!(!InitOutcome::Cancelled.proceeds());
        assert!(!InitOutcome::Failed("x".into()).proceeds());
    }
}
