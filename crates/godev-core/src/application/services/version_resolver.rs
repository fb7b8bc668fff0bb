//! Latest Go version lookup with graceful degradation.

use tracing::{debug, info, instrument, warn};

use crate::application::ports::VersionSource;
use crate::domain::version::{
    EndpointFailure, FALLBACK_GO_VERSION, MIRROR_VERSION_ENDPOINT, PRIMARY_VERSION_ENDPOINT,
    ResolvedVersion, VersionOrigin, parse_version_body,
};

/// Tries each endpoint in order, then falls back to a compiled-in version.
///
/// [`resolve_latest`](Self::resolve_latest) never fails: every endpoint
/// failure is logged, recorded on the result, and the next source is tried.
pub struct VersionResolver {
    source: Box<dyn VersionSource>,
    endpoints: Vec<String>,
    fallback: String,
}

impl VersionResolver {
    pub fn new(source: Box<dyn VersionSource>, endpoints: Vec<String>) -> Self {
        Self {
            source,
            endpoints,
            fallback: FALLBACK_GO_VERSION.to_owned(),
        }
    }

    /// `go.dev` first, then `golang.org`.
    pub fn with_default_endpoints(source: Box<dyn VersionSource>) -> Self {
        Self::new(source, default_endpoints())
    }

    pub fn with_fallback(mut self, version: impl Into<String>) -> Self {
        self.fallback = version.into();
        self
    }

    #[instrument(skip_all, fields(endpoints = self.endpoints.len()))]
    pub fn resolve_latest(&self) -> ResolvedVersion {
        let mut failures = Vec::new();

        for url in &self.endpoints {
            debug!(%url, "Fetching latest Go version");
            let reason = match self.source.fetch(url) {
                Ok(body) => match parse_version_body(&body) {
                    Some(version) => {
                        info!(%url, %version, "Resolved latest Go version");
                        return ResolvedVersion {
                            version,
                            origin: VersionOrigin::Endpoint(url.clone()),
                            failures,
                        };
                    }
                    None => "empty response body".to_owned(),
                },
                Err(e) => e.to_string(),
            };

            warn!(%url, %reason, "Version endpoint failed, trying next source");
            failures.push(EndpointFailure {
                url: url.clone(),
                reason,
            });
        }

        warn!(version = %self.fallback, "All version endpoints failed, using fallback");
        ResolvedVersion {
            version: self.fallback.clone(),
            origin: VersionOrigin::Fallback,
            failures,
        }
    }
}

pub fn default_endpoints() -> Vec<String> {
    vec![
        PRIMARY_VERSION_ENDPOINT.to_owned(),
        MIRROR_VERSION_ENDPOINT.to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockVersionSource};
    use mockall::predicate::eq;

    fn network_error(url: &str) -> crate::error::GodevError {
        ApplicationError::Network {
            url: url.into(),
            reason: "connection refused".into(),
        }
        .into()
    }

    #[test]
    fn primary_endpoint_wins() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch()
            .with(eq(PRIMARY_VERSION_ENDPOINT))
            .times(1)
            .returning(|_| Ok("go1.26.0\ntime 2026-02-01T00:00:00Z\n".into()));

        let resolved = VersionResolver::with_default_endpoints(Box::new(source)).resolve_latest();

        assert_eq!(resolved.version, "1.26.0");
        assert_eq!(
            resolved.origin,
            VersionOrigin::Endpoint(PRIMARY_VERSION_ENDPOINT.into())
        );
        assert!(resolved.failures.is_empty());
    }

    #[test]
    fn mirror_is_used_when_primary_fails() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch()
            .with(eq(PRIMARY_VERSION_ENDPOINT))
            .returning(|url| Err(network_error(url)));
        source
            .expect_fetch()
            .with(eq(MIRROR_VERSION_ENDPOINT))
            .returning(|_| Ok("go1.25.7".into()));

        let resolved = VersionResolver::with_default_endpoints(Box::new(source)).resolve_latest();

        assert_eq!(resolved.version, "1.25.7");
        assert_eq!(resolved.failures.len(), 1);
        assert_eq!(resolved.failures[0].url, PRIMARY_VERSION_ENDPOINT);
    }

    #[test]
    fn falls_back_when_everything_fails() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch()
            .times(2)
            .returning(|url| Err(network_error(url)));

        let resolved = VersionResolver::with_default_endpoints(Box::new(source)).resolve_latest();

        assert_eq!(resolved.version, FALLBACK_GO_VERSION);
        assert!(resolved.is_fallback());
        assert_eq!(resolved.failures.len(), 2);
    }

    #[test]
    fn empty_body_counts_as_failure() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch()
            .with(eq(PRIMARY_VERSION_ENDPOINT))
            .returning(|_| Ok("\n".into()));
        source
            .expect_fetch()
            .with(eq(MIRROR_VERSION_ENDPOINT))
            .returning(|_| Ok("go1.24.2\n".into()));

        let resolved = VersionResolver::with_default_endpoints(Box::new(source)).resolve_latest();

        assert_eq!(resolved.version, "1.24.2");
        assert_eq!(resolved.failures[0].reason, "empty response body");
    }

    #[test]
    fn no_endpoints_goes_straight_to_fallback() {
        let source = MockVersionSource::new();
        let resolved = VersionResolver::new(Box::new(source), Vec::new())
            .with_fallback("1.23.0")
            .resolve_latest();

        assert_eq!(resolved.version, "1.23.0");
        assert!(resolved.failures.is_empty());
    }
}
