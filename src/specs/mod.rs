// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction for the two pages the pipeline reads: the blog
//! search results listing and a single post on the mobile blog host. Each spec
//! owns its CSS selectors, so when the site's markup drifts the fix lives in
//! exactly one file.
//!
//! ## What lives here
//! - Selector strings and their precedence (new post layout before old).
//! - Pure HTML → small structs (`ListingEntry`, `PostBody`). No network.
//!
//! ## What does **not** live here
//! - Fetching, link rewriting, failure policy (`scrape`).
//! - Export formatting (`csv`, `file`).
//!
//! ## Call chain
//! ```text
//! scrape::search  → Fetch::get(search url) → ListingParser::items()
//!                 ↘ for each entry: scrape::content → Fetch::get(mobile url) → BodyParser::extract()
//! ```
//!
//! Specs are testable offline against inline snippets or saved pages.
pub mod listing;
pub mod post;

use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;

pub use listing::{ListingEntry, ListingParser, NaverListing};
pub use post::{BodyParser, Layout, NaverPost, PostBody};

const HIDDEN: [&str; 3] = ["script", "style", "template"];

/// Text nodes under `el` in document order, minus script/style/template contents.
pub(crate) fn visible_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    el.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|p| HIDDEN.contains(&p.value().name()));
        (!hidden).then_some(&**text)
    })
}

pub(crate) fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}
