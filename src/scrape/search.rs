// src/scrape/search.rs
use tracing::{debug, info};

use super::{degrade, ContentFetcher};
use crate::{
    config::consts::SEARCH_ENDPOINT,
    config::options::ScrapeOptions,
    core::Fetch,
    data::SearchResult,
    error::{ScrapeError, Stage},
    progress::{NullProgress, Progress},
    specs::{BodyParser, ListingParser, NaverListing, NaverPost},
};

/// Search URL for a keyword (percent-encoded into the fixed blog-tab query).
pub fn search_url(keyword: &str) -> String {
    format!("{SEARCH_ENDPOINT}{}", urlencoding::encode(keyword))
}

/// Runs one search: listing page first, then one body fetch per trusted item,
/// strictly in document order.
pub struct SearchFetcher<'f> {
    fetch: &'f dyn Fetch,
    listing: Box<dyn ListingParser>,
    content: ContentFetcher<'f>,
}

impl<'f> SearchFetcher<'f> {
    pub fn new(fetch: &'f dyn Fetch) -> Result<Self, ScrapeError> {
        Ok(Self::with_parsers(
            fetch,
            Box::new(NaverListing::new()?),
            Box::new(NaverPost::new()?),
        ))
    }

    pub fn with_parsers(
        fetch: &'f dyn Fetch,
        listing: Box<dyn ListingParser>,
        body: Box<dyn BodyParser>,
    ) -> Self {
        Self { fetch, listing, content: ContentFetcher::with_parser(fetch, body) }
    }

    /// Collect up to `opts.limit` results.
    ///
    /// Only the first `limit` raw listing items are examined; items dropped by
    /// the domain filter still use up a slot and are never backfilled.
    /// Under `FailurePolicy::Degrade` this returns `Err` only for an invalid
    /// request; every fetch/parse failure is reported through `progress`.
    pub fn search(
        &self,
        opts: &ScrapeOptions,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<SearchResult>, ScrapeError> {
        opts.validate()?;

        let mut null = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };

        info!(keyword = %opts.keyword, limit = opts.limit, policy = ?opts.policy, "Search: begin");
        progress.begin(opts.limit);

        let mut results = Vec::new();
        let outcome = self.collect(opts, progress, &mut results);

        progress.finish(results.len());
        match outcome {
            Ok(()) => {
                info!(collected = results.len(), "Search: done");
                Ok(results)
            }
            Err(e) => {
                info!(error = %e, "Search: aborted");
                Err(e)
            }
        }
    }

    fn collect(
        &self,
        opts: &ScrapeOptions,
        progress: &mut dyn Progress,
        results: &mut Vec<SearchResult>,
    ) -> Result<(), ScrapeError> {
        let url = search_url(&opts.keyword);
        progress.log("Fetching search results…");

        let html = match self.fetch.get(&url) {
            Ok(html) => html,
            Err(e) => return degrade(Stage::Page, e, opts.policy, progress),
        };

        let items = self.listing.items(&html);
        debug!(found = items.len(), examine = opts.limit.min(items.len()), "Search: listing parsed");

        for (i, item) in items.into_iter().take(opts.limit).enumerate() {
            let stage = Stage::Item(i + 1);
            let entry = match item {
                Ok(Some(entry)) => entry,
                Ok(None) => {
                    debug!(item = i + 1, "Search: skipped (no trusted link)");
                    continue;
                }
                Err(e) => {
                    degrade(stage, e, opts.policy, progress)?;
                    continue;
                }
            };

            let body = self.content.fetch_body_with(&entry.link, opts.policy, progress)?;

            match SearchResult::new(results.len() + 1, entry, body) {
                Ok(result) => {
                    progress.item_done(&result);
                    results.push(result);
                }
                Err(e) => degrade(stage, e, opts.policy, progress)?,
            }
        }
        Ok(())
    }
}
