//! Go versions: parsing, ordering, and the outcome of resolving the latest one.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Used when no endpoint answers with a usable version.
pub const FALLBACK_GO_VERSION: &str = "1.25.5";

pub const PRIMARY_VERSION_ENDPOINT: &str = "https://go.dev/VERSION?m=text";
pub const MIRROR_VERSION_ENDPOINT: &str = "https://golang.org/VERSION?m=text";

/// Default per-request timeout for version endpoints, in seconds.
pub const DEFAULT_VERSION_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum PreKind {
    Alpha,
    Beta,
    Rc,
}

impl PreKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "rc",
        }
    }
}

/// A Go release or language version.
///
/// Ordering follows the Go toolchain: the language version `1.21` sorts
/// before its prereleases (`1.21rc1`), which sort before the first release
/// `1.21.0`. A bare `1` means `1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoVersion {
    major: u64,
    minor: u64,
    patch: Option<u64>,
    pre: Option<(PreKind, u64)>,
}

impl GoVersion {
    /// Parse `1.22`, `1.22.3`, `1.23rc1`, optionally prefixed with `go`.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidGoVersion {
            value: input.to_owned(),
        };

        let s = input.trim();
        let s = s.strip_prefix("go").unwrap_or(s);

        let (major, rest) = cut_number(s).ok_or_else(invalid)?;
        if rest.is_empty() {
            return Ok(Self {
                major,
                minor: 0,
                patch: Some(0),
                pre: None,
            });
        }

        let rest = rest.strip_prefix('.').ok_or_else(invalid)?;
        let (minor, rest) = cut_number(rest).ok_or_else(invalid)?;

        if rest.is_empty() {
            return Ok(Self {
                major,
                minor,
                patch: None,
                pre: None,
            });
        }

        if let Some(rest) = rest.strip_prefix('.') {
            let (patch, rest) = cut_number(rest).ok_or_else(invalid)?;
            if !rest.is_empty() {
                return Err(invalid());
            }
            return Ok(Self {
                major,
                minor,
                patch: Some(patch),
                pre: None,
            });
        }

        let (kind, rest) = [PreKind::Alpha, PreKind::Beta, PreKind::Rc]
            .into_iter()
            .find_map(|k| rest.strip_prefix(k.as_str()).map(|r| (k, r)))
            .ok_or_else(invalid)?;
        let (n, rest) = cut_number(rest).ok_or_else(invalid)?;
        if !rest.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch: None,
            pre: Some((kind, n)),
        })
    }

    /// Parse the output of `go env GOVERSION`.
    ///
    /// Accepts `go1.22.3`, `go1.22.3 X:nocoverageredesign`, and vendor
    /// suffixes such as `go1.21.0-bigcorp`. Development builds
    /// (`devel go1.23-abc...`) parse to the embedded version when present.
    pub fn from_toolchain(output: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidGoVersion {
            value: output.trim().to_owned(),
        };
        let token = output
            .split_whitespace()
            .find(|t| t.starts_with("go"))
            .ok_or_else(invalid)?;
        let token = token.split(['-', '+']).next().unwrap_or(token);
        Self::parse(token).map_err(|_| invalid())
    }
}

fn cut_number(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let n = s[..end].parse().ok()?;
    Some((n, &s[end..]))
}

impl Ord for GoVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then(self.pre.cmp(&other.pre))
    }
}

impl PartialOrd for GoVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for GoVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
        }
        if let Some((kind, n)) = self.pre {
            write!(f, "{}{n}", kind.as_str())?;
        }
        Ok(())
    }
}

/// Extract the version from a `VERSION?m=text` response body.
///
/// Only the first line matters; it is trimmed and its `go` prefix dropped.
/// Returns `None` when nothing is left.
pub fn parse_version_body(body: &str) -> Option<String> {
    let first = body.lines().next().unwrap_or("").trim();
    let version = first.strip_prefix("go").unwrap_or(first).trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_owned())
    }
}

/// Where a resolved version came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "url")]
pub enum VersionOrigin {
    Endpoint(String),
    Fallback,
}

/// An endpoint that did not yield a version, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointFailure {
    pub url: String,
    pub reason: String,
}

/// Result of the latest-version lookup. Always carries a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub version: String,
    pub origin: VersionOrigin,
    pub failures: Vec<EndpointFailure>,
}

impl ResolvedVersion {
    pub fn is_fallback(&self) -> bool {
        self.origin == VersionOrigin::Fallback
    }
}
