// src/config/consts.rs

// Net config
pub const SEARCH_ENDPOINT: &str =
    "https://search.naver.com/search.naver?ssc=tab.blog.all&sm=tab_jum&query=";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

// Site markers
pub const TRUSTED_DOMAIN_MARKER: &str = "blog.naver.com";
pub const DESKTOP_HOST: &str = "blog.naver.com";
pub const MOBILE_HOST: &str = "m.blog.naver.com";
pub const MOBILE_HOST_MARKER: &str = "m.blog.naver.com";

// Scrape
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 50;
pub const DEFAULT_LIMIT: usize = 30;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_PREFIX: &str = "naver_blog_";
pub const EXPORT_EXT: &str = "csv";
pub const FALLBACK_STEM: &str = "results";
