use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("unreachable: {0}")]
    Unreachable(String),
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Blocking GET. A non-success status is still a response, not an error.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

pub struct BrowserClient {
    client: Client,
}

impl BrowserClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpClient for BrowserClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(HttpResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_counts_as_success() {
        let ok = HttpResponse { status: 200, body: String::new() };
        let created = HttpResponse { status: 201, body: String::new() };
        let throttled = HttpResponse { status: 429, body: String::new() };
        assert!(ok.is_success());
        assert!(!created.is_success());
        assert!(!throttled.is_success());
    }

    #[test]
    fn test_browser_client_builds() {
        let client = BrowserClient::new("Mozilla/5.0", Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    #[ignore] // Requires network access
    fn test_browser_client_fetches_page() {
        let client = BrowserClient::new("Mozilla/5.0", Duration::from_secs(10))
            .expect("Failed to create client");
        let response = client.get("https://www.linkedin.com/jobs").expect("request failed");
        assert!(response.status > 0);
    }
}
