use std::time::Duration;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::public_ip::api::FetchText;

/// Blocking HTTP client for the address-echo service.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// Applies `timeout` to both connecting and reading. Without one, the
    /// transport defaults are used.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        HttpFetcher { timeout }
    }
}

impl FetchText for HttpFetcher {
    fn describe(&self) -> String {
        match self.timeout {
            Some(timeout) => format!("HTTP[timeout={:?}]", timeout),
            None => "HTTP".to_string(),
        }
    }

    fn fetch_text(&self, url: &str) -> Result<String> {
        let mut request = attohttpc::get(url);
        if let Some(timeout) = self.timeout {
            request = request.connect_timeout(timeout).read_timeout(timeout);
        }
        let response = request.send().map_err(|e| Error::Network(e.into()))?;

        let status = response.status();
        debug!("{} answered with {}", url, status);
        if !response.is_success() {
            warn!("{} answered with {}, using body anyway", url, status);
        }

        let body = response.bytes().map_err(|e| Error::Io(e.into()))?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use httpmock::prelude::*;

    use super::*;

    #[test]
    fn returns_body_verbatim() {
        let server = MockServer::start();
        let echo = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("203.0.113.9\n");
        });

        let body = HttpFetcher::default().fetch_text(&server.url("/")).unwrap();

        echo.assert();
        assert_eq!(body, "203.0.113.9\n");
    }

    #[test]
    fn accepts_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(503).body("unavailable");
        });

        let body = HttpFetcher::default().fetch_text(&server.url("/")).unwrap();

        assert_eq!(body, "unavailable");
    }

    #[test]
    fn sends_no_query_parameters() {
        let server = MockServer::start();
        let echo = server.mock(|when, then| {
            when.method(GET).path("/ip");
            then.status(200).body("198.51.100.4");
        });

        let fetcher = HttpFetcher::with_timeout(Some(Duration::from_secs(5)));
        let body = fetcher.fetch_text(&server.url("/ip")).unwrap();

        echo.assert_hits(1);
        assert_eq!(body, "198.51.100.4");
    }

    #[test]
    fn unreachable_endpoint_is_a_network_error() {
        let fetcher = HttpFetcher::with_timeout(Some(Duration::from_secs(2)));
        let err = fetcher.fetch_text("http://127.0.0.1:1/").unwrap_err();
        assert_matches!(err, Error::Network(_));
    }
}
