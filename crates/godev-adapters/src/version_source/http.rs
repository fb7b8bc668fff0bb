//! Fetches `VERSION?m=text` bodies over HTTPS.

use std::time::Duration;

use godev_core::{
    application::{ApplicationError, ports::VersionSource},
    error::{GodevError, GodevResult},
};
use reqwest::blocking::Client;
use tracing::{debug, instrument};

/// Blocking HTTP client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpVersionSource {
    client: Client,
}

impl HttpVersionSource {
    pub fn new(timeout: Duration) -> GodevResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("godev/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| GodevError::Configuration {
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl VersionSource for HttpVersionSource {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> GodevResult<String> {
        let network = |reason: String| -> GodevError {
            ApplicationError::Network {
                url: url.to_owned(),
                reason,
            }
            .into()
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| network(describe(&e)))?;

        debug!(status = %response.status(), "Version endpoint answered");
        response.text().map_err(|e| network(describe(&e)))
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_owned()
    } else if let Some(status) = e.status() {
        format!("HTTP {status}")
    } else if e.is_connect() {
        "connection failed".to_owned()
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response on a random local port.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/VERSION?m=text")
    }

    #[test]
    fn returns_body_on_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 35\r\nConnection: close\r\n\r\ngo1.25.5\ntime 2025-12-02T18:00:00Z\n",
        );
        let source = HttpVersionSource::new(Duration::from_secs(5)).unwrap();
        let body = source.fetch(&url).unwrap();
        assert!(body.starts_with("go1.25.5\n"));
    }

    #[test]
    fn error_status_is_a_network_error() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let source = HttpVersionSource::new(Duration::from_secs(5)).unwrap();
        let err = source.fetch(&url).unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        // Bind then drop so the port is very likely closed.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let source = HttpVersionSource::new(Duration::from_secs(2)).unwrap();
        let err = source
            .fetch(&format!("http://127.0.0.1:{port}/VERSION?m=text"))
            .unwrap_err();
        assert!(matches!(
            err,
            GodevError::Application(ApplicationError::Network { .. })
        ));
    }
}
