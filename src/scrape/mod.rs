// src/scrape/mod.rs
mod content;
mod search;

pub use content::{mobile_link, ContentFetcher};
pub use search::{search_url, SearchFetcher};

use tracing::warn;

use crate::{
    config::options::{FailurePolicy, ScrapeOptions},
    core::HttpClient,
    data::SearchResult,
    error::{Failure, ScrapeError, Stage},
    progress::{NullProgress, Progress},
};

/// Top-level: run one search against the live site (no file IO).
pub fn run(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<SearchResult>, ScrapeError> {
    opts.validate()?;

    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let client = match HttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            degrade(Stage::Page, e, opts.policy, progress)?;
            return Ok(Vec::new());
        }
    };

    SearchFetcher::new(&client)?.search(opts, Some(progress))
}

/// Apply the failure policy: report and carry on, or hand the error back.
pub(crate) fn degrade(
    stage: Stage,
    err: ScrapeError,
    policy: FailurePolicy,
    progress: &mut dyn Progress,
) -> Result<(), ScrapeError> {
    match policy {
        FailurePolicy::Degrade => {
            let failure = Failure::new(stage, &err);
            warn!(stage = %failure.stage, kind = ?failure.kind, "Scrape: {}", failure.message);
            progress.warn(&failure);
            Ok(())
        }
        FailurePolicy::Abort => Err(err),
    }
}
