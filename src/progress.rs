// src/progress.rs
use crate::data::SearchResult;
use crate::error::Failure;

/// Lightweight progress reporting for a scrape.
/// Frontends (GUI/CLI) implement this to surface status and warnings to users.
pub trait Progress {
    /// Called at the start with the maximum number of listing items to examine.
    fn begin(&mut self, _limit: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one post was collected (body attached).
    fn item_done(&mut self, _result: &SearchResult) {}

    /// A page, item or body step failed and was degraded.
    fn warn(&mut self, _failure: &Failure) {}

    /// Called at the end with the number of collected posts.
    fn finish(&mut self, _collected: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
