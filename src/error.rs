// src/error.rs
//! Failure types shared by the fetchers and both front ends.
//!
//! `ScrapeError` is what a single fetch/parse step returns. When the active
//! policy degrades instead of aborting, the error is folded into a `Failure`
//! and handed to the progress sink, so the caller still learns *what kind* of
//! thing went wrong without the pipeline stopping.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("unexpected content type `{content_type}` from {url}")]
    NotHtml { content_type: String, url: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Parse,
    NotFound,
    Request,
}

impl ScrapeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ScrapeError::Network(_) | ScrapeError::Status { .. } => FailureKind::Network,
            ScrapeError::NotHtml { .. } | ScrapeError::Parse(_) | ScrapeError::Selector(_) => {
                FailureKind::Parse
            }
            ScrapeError::NotFound(_) => FailureKind::NotFound,
            ScrapeError::InvalidRequest(_) => FailureKind::Request,
        }
    }
}

/// Which unit of work a failure belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// The search results page itself.
    Page,
    /// A listing item, by 1-based position among the examined items.
    Item(usize),
    /// A post body fetch for the given link.
    Body(String),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Page => write!(f, "search page"),
            Stage::Item(n) => write!(f, "listing item {n}"),
            Stage::Body(link) => write!(f, "post body {link}"),
        }
    }
}

/// User-visible record of a degraded step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub stage: Stage,
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(stage: Stage, err: &ScrapeError) -> Self {
        Self { stage, kind: err.kind(), message: err.to_string() }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_classified() {
        assert_eq!(ScrapeError::Network(s!("reset")).kind(), FailureKind::Network);
        assert_eq!(
            ScrapeError::Status { status: 503, url: s!("u") }.kind(),
            FailureKind::Network
        );
        assert_eq!(ScrapeError::Parse(s!("x")).kind(), FailureKind::Parse);
        assert_eq!(ScrapeError::NotFound("post body").kind(), FailureKind::NotFound);
    }

    #[test]
    fn failure_display_names_the_stage() {
        let f = Failure::new(Stage::Item(3), &ScrapeError::Parse(s!("relative link")));
        assert_eq!(f.to_string(), "listing item 3: parse error: relative link");
    }
}
