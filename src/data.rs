// src/data.rs
//
// Scrape output and its table shape.
//
// - SearchResult: one collected post. Built only through `SearchResult::new`,
//                 which enforces the trusted-domain invariant on the link.
// - DataSet: headers + string rows, shared by the results table and export.

use crate::config::consts::TRUSTED_DOMAIN_MARKER;
use crate::error::ScrapeError;
use crate::specs::ListingEntry;

/// Column names, in row order.
pub const HEADERS: [&str; 6] = ["No", "Title", "Author", "Date", "Link", "Body"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    seq: usize,
    title: String,
    author: String,
    date: String,
    link: String,
    body: String,
}

impl SearchResult {
    /// `seq` is the 1-based position in the collected sequence.
    pub fn new(seq: usize, entry: ListingEntry, body: String) -> Result<Self, ScrapeError> {
        if !entry.link.contains(TRUSTED_DOMAIN_MARKER) {
            return Err(ScrapeError::Parse(format!(
                "link `{}` is outside {TRUSTED_DOMAIN_MARKER}",
                entry.link
            )));
        }
        let ListingEntry { link, title, author, date } = entry;
        Ok(Self { seq, title, author, date, link, body })
    }

    pub fn seq(&self) -> usize { self.seq }
    pub fn title(&self) -> &str { &self.title }
    pub fn author(&self) -> &str { &self.author }
    pub fn date(&self) -> &str { &self.date }
    pub fn link(&self) -> &str { &self.link }
    pub fn body(&self) -> &str { &self.body }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.seq.to_string(),
            self.title.clone(),
            self.author.clone(),
            self.date.clone(),
            self.link.clone(),
            self.body.clone(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_results(results: &[SearchResult]) -> Self {
        Self {
            headers: Some(HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: results.iter().map(SearchResult::to_row).collect(),
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(link: &str) -> ListingEntry {
        ListingEntry { link: s!(link), title: s!("t"), author: s!("a"), date: s!("d") }
    }

    #[test]
    fn rejects_untrusted_link() {
        assert!(SearchResult::new(1, entry("https://example.com/p"), s!()).is_err());
    }

    #[test]
    fn row_follows_header_order() {
        let r = SearchResult::new(2, entry("https://blog.naver.com/a/1"), s!("body")).unwrap();
        assert_eq!(r.to_row(), vec!["2", "t", "a", "d", "https://blog.naver.com/a/1", "body"]);
        let ds = DataSet::from_results(&[r]);
        assert_eq!(ds.headers.as_ref().map(Vec::len), Some(HEADERS.len()));
        assert_eq!(ds.row_count(), 1);
    }
}
