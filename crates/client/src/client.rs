//! Blocking fetch of the upstream text dump.
//!
//! No retry loop: a failed load is surfaced once and recovery is the user
//! re-invoking the command.

use std::time::Duration;

const USER_AGENT: &str = concat!("aufiles/", env!("CARGO_PKG_VERSION"));

/// Client for the remote flat-text document (blocking).
pub struct TextClient {
    http: reqwest::blocking::Client,
    url: String,
}

/// Error type for remote fetches.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, timeout).
    Network(String),
    /// Non-2xx response.
    Http(u16),
    /// Response body could not be read.
    Body(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Http(status) => write!(f, "Failed to fetch data (status {status})"),
            Self::Body(msg) => write!(f, "Failed to read response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl TextClient {
    pub fn new(url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            url: url.into(),
        }
    }

    /// The configured dump URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw dump text. Any non-2xx status is a hard failure for
    /// this load.
    pub fn fetch_text(&self) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            return Err(FetchError::Http(status));
        }

        resp.text().map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_the_status() {
        let err = FetchError::Http(404);
        assert_eq!(err.to_string(), "Failed to fetch data (status 404)");
    }

    #[test]
    fn network_error_is_prefixed() {
        let err = FetchError::Network("connection refused".into());
        assert!(err.to_string().starts_with("Network error:"));
    }

    #[test]
    fn client_keeps_the_configured_url() {
        let client = TextClient::new("https://example.com/dump.txt");
        assert_eq!(client.url(), "https://example.com/dump.txt");
    }
}
