// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::core::sanitize::sanitize_keyword_filename;
use crate::error::ScrapeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to do when a page, item or body fetch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report through the progress sink and keep whatever was collected.
    #[default]
    Degrade,
    /// Stop at the first failure and hand it back to the caller.
    Abort,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub keyword: String,
    pub limit: usize,
    pub policy: FailurePolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            keyword: s!(),
            limit: DEFAULT_LIMIT,
            policy: FailurePolicy::Degrade,
        }
    }
}

impl ScrapeOptions {
    pub fn new(keyword: impl Into<String>, limit: usize) -> Self {
        Self { keyword: keyword.into(), limit, ..Self::default() }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keyword must be non-blank; limit must sit in `MIN_LIMIT..=MAX_LIMIT`.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.keyword.trim().is_empty() {
            return Err(ScrapeError::InvalidRequest(s!("keyword is empty")));
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.limit) {
            return Err(ScrapeError::InvalidRequest(format!(
                "limit {} outside {}..={}",
                self.limit, MIN_LIMIT, MAX_LIMIT
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub include_headers: bool,
    /// Prefix the file with a UTF-8 byte-order mark (spreadsheet apps need it for Hangul).
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
            bom: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Blank keeps the current one.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = PathBuf::from(s);
        }
    }

    /// `<out_dir>/naver_blog_<keyword>.csv`
    pub fn out_path(&self, keyword: &str) -> PathBuf {
        self.out_dir.join(export_file_name(keyword))
    }
}

pub fn export_file_name(keyword: &str) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.{EXPORT_EXT}", sanitize_keyword_filename(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_defaults() {
        let opts = AppOptions::default();
        assert_eq!(opts.scrape.limit, 30);
        assert_eq!(opts.scrape.policy, FailurePolicy::Degrade);
        assert!(opts.export.include_headers);
        assert!(opts.export.bom);
    }

    #[test]
    fn validate_rejects_blank_keyword_and_out_of_range_limit() {
        assert!(ScrapeOptions::new("   ", 5).validate().is_err());
        assert!(ScrapeOptions::new("coffee", 0).validate().is_err());
        assert!(ScrapeOptions::new("coffee", 51).validate().is_err());
        assert!(ScrapeOptions::new("coffee", 1).validate().is_ok());
        assert!(ScrapeOptions::new("coffee", 50).validate().is_ok());
    }

    #[test]
    fn out_path_uses_keyword_stem() {
        let mut export = ExportOptions::default();
        export.set_dir("exports");
        let p = export.out_path("커피 원두");
        assert_eq!(p, PathBuf::from("exports").join("naver_blog_커피 원두.csv"));
    }

    #[test]
    fn blank_dir_text_keeps_previous_dir() {
        let mut export = ExportOptions::default();
        export.set_dir("  ");
        assert_eq!(export.out_dir(), Path::new(DEFAULT_OUT_DIR));
    }
}
