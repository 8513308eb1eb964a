// src/core/net.rs
// Blocking HTTP GET behind a small trait so the fetchers can run against canned pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// Fetch a URL and return its body as text.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        (**self).get(url)
    }
}

/// reqwest-backed fetcher: fixed browser User-Agent, no timeout, no retry.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
        }

        if let Some(ct) = resp.headers().get(CONTENT_TYPE) {
            let ct = ct.to_str().unwrap_or("").to_ascii_lowercase();
            if !is_html_like(&ct) {
                return Err(ScrapeError::NotHtml { content_type: ct, url: s!(url) });
            }
        }

        let body = resp.text().map_err(|e| ScrapeError::Network(e.to_string()))?;
        debug!(url, bytes = body.len(), "GET ok");
        Ok(body)
    }
}

/// HTML, XHTML or any `text/*`. An empty content type passes.
pub fn is_html_like(content_type: &str) -> bool {
    content_type.is_empty() || content_type.contains("html") || content_type.starts_with("text/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_like_content_types() {
        assert!(is_html_like("text/html; charset=utf-8"));
        assert!(is_html_like("application/xhtml+xml"));
        assert!(is_html_like("text/plain"));
        assert!(is_html_like(""));
        assert!(!is_html_like("application/json"));
        assert!(!is_html_like("image/png"));
    }
}
