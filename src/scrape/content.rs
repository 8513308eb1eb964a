// src/scrape/content.rs
use tracing::debug;
use url::Url;

use super::degrade;
use crate::{
    config::consts::{DESKTOP_HOST, MOBILE_HOST, MOBILE_HOST_MARKER},
    config::options::FailurePolicy,
    core::Fetch,
    error::{FailureKind, ScrapeError, Stage},
    progress::Progress,
    specs::{BodyParser, NaverPost},
};

/// Desktop blog link → mobile blog link. Any other host is returned unchanged.
pub fn mobile_link(link: &str) -> String {
    match Url::parse(link) {
        Ok(mut url) if url.host_str() == Some(DESKTOP_HOST) => {
            if url.set_host(Some(MOBILE_HOST)).is_ok() {
                url.to_string()
            } else {
                s!(link)
            }
        }
        _ => s!(link),
    }
}

/// Fetches one post through the mobile site and extracts its body text.
pub struct ContentFetcher<'f> {
    fetch: &'f dyn Fetch,
    parser: Box<dyn BodyParser>,
}

impl<'f> ContentFetcher<'f> {
    pub fn new(fetch: &'f dyn Fetch) -> Result<Self, ScrapeError> {
        Ok(Self::with_parser(fetch, Box::new(NaverPost::new()?)))
    }

    pub fn with_parser(fetch: &'f dyn Fetch, parser: Box<dyn BodyParser>) -> Self {
        Self { fetch, parser }
    }

    /// Body text or the reason there is none. Links that never reach the
    /// mobile host are `NotFound` without touching the network.
    pub fn try_fetch_body(&self, link: &str) -> Result<String, ScrapeError> {
        let url = mobile_link(link);
        match Url::parse(&url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => {}
            _ => return Err(ScrapeError::Parse(format!("link `{link}` is not an absolute http(s) URL"))),
        }
        // Off-host links skip the GET and stay silent; a failed GET would warn.
        if !url.contains(MOBILE_HOST_MARKER) {
            return Err(ScrapeError::NotFound("mobile blog host"));
        }
        let html = self.fetch.get(&url)?;
        let body = self.parser.extract(&html)?;
        debug!(url = %url, layout = ?body.layout, chars = body.text.len(), "Body: extracted");
        Ok(body.text)
    }

    /// Never fails: a missing body is an empty string, any other failure is
    /// reported through `progress` and also yields an empty string.
    pub fn fetch_body(&self, link: &str, progress: &mut dyn Progress) -> String {
        self.fetch_body_with(link, FailurePolicy::Degrade, progress)
            .unwrap_or_default()
    }

    /// Like `fetch_body`, but under `Abort` a real failure is returned.
    /// `NotFound` always degrades silently to an empty body.
    pub fn fetch_body_with(
        &self,
        link: &str,
        policy: FailurePolicy,
        progress: &mut dyn Progress,
    ) -> Result<String, ScrapeError> {
        match self.try_fetch_body(link) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == FailureKind::NotFound => {
                debug!(link, "Body: {}", e);
                Ok(s!())
            }
            Err(e) => {
                degrade(Stage::Body(s!(link)), e, policy, progress)?;
                Ok(s!())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_links_move_to_mobile_host() {
        assert_eq!(
            mobile_link("https://blog.naver.com/alice/223000000001"),
            "https://m.blog.naver.com/alice/223000000001"
        );
        assert_eq!(
            mobile_link("https://blog.naver.com/PostView.naver?blogId=bob&logNo=1"),
            "https://m.blog.naver.com/PostView.naver?blogId=bob&logNo=1"
        );
    }

    #[test]
    fn other_hosts_are_left_alone() {
        assert_eq!(mobile_link("https://m.blog.naver.com/a/1"), "https://m.blog.naver.com/a/1");
        assert_eq!(mobile_link("https://example.com/blog.naver.com"), "https://example.com/blog.naver.com");
        assert_eq!(mobile_link("not a url"), "not a url");
    }
}
