// src/specs/listing.rs

use scraper::{ElementRef, Html, Selector};

use super::{selector, visible_text};
use crate::config::consts::TRUSTED_DOMAIN_MARKER;
use crate::core::sanitize::{join_stripped, joined_trimmed};
use crate::error::ScrapeError;

const ITEM: &str = "div.api_subject_bx ul > li";
const TITLE_ANCHOR: &str = "div.detail_box > div.title_area > a";
const AUTHOR: &str = "div.user_box > div.user_box_inner > div > a";
const DATE: &str = "div.user_box > div.user_box_inner > div > span";

/// One listing item that passed the trusted-domain filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    pub link: String,
    pub title: String,
    pub author: String,
    pub date: String,
}

/// Turns a search results page into per-item outcomes.
pub trait ListingParser {
    /// One element per raw listing item, in document order:
    /// - `Ok(Some(_))` trusted entry
    /// - `Ok(None)` no link, or a link off the trusted domain
    /// - `Err(_)` the item could not be read
    fn items(&self, html: &str) -> Vec<Result<Option<ListingEntry>, ScrapeError>>;
}

pub struct NaverListing {
    item: Selector,
    title: Selector,
    author: Selector,
    date: Selector,
}

impl NaverListing {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            item: selector(ITEM)?,
            title: selector(TITLE_ANCHOR)?,
            author: selector(AUTHOR)?,
            date: selector(DATE)?,
        })
    }

    fn entry(&self, item: ElementRef<'_>) -> Result<Option<ListingEntry>, ScrapeError> {
        let Some(anchor) = item.select(&self.title).next() else {
            return Ok(None);
        };
        let link = match anchor.value().attr("href") {
            Some(href) if !href.is_empty() && href.contains(TRUSTED_DOMAIN_MARKER) => href,
            _ => return Ok(None),
        };

        let title = join_stripped(visible_text(anchor));
        let author = self.first_text(item, &self.author);
        let date = self.first_text(item, &self.date);

        Ok(Some(ListingEntry { link: s!(link), title, author, date }))
    }

    fn first_text(&self, item: ElementRef<'_>, sel: &Selector) -> String {
        item.select(sel)
            .next()
            .map(|el| joined_trimmed(visible_text(el)))
            .unwrap_or_default()
    }
}

impl ListingParser for NaverListing {
    fn items(&self, html: &str) -> Vec<Result<Option<ListingEntry>, ScrapeError>> {
        let doc = Html::parse_document(html);
        doc.select(&self.item).map(|li| self.entry(li)).collect()
    }
}
