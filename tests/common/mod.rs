// tests/common/mod.rs
//
// Canned pages and recording sinks shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use naver_blog_scrape::core::Fetch;
use naver_blog_scrape::data::SearchResult;
use naver_blog_scrape::error::{Failure, ScrapeError};
use naver_blog_scrape::progress::Progress;

/// In-memory `Fetch`: url → page (or error). Unknown URLs are network errors.
#[derive(Default)]
pub struct StubFetch {
    pages: HashMap<String, Result<String, String>>,
    requested: RefCell<Vec<String>>,
}

impl StubFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), Ok(html.into()));
        self
    }

    pub fn failing(mut self, url: impl Into<String>, msg: &str) -> Self {
        self.pages.insert(url.into(), Err(msg.to_string()));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StubFetch {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        self.requested.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(msg)) => Err(ScrapeError::Network(msg.clone())),
            None => Err(ScrapeError::Network(format!("no stub for {url}"))),
        }
    }
}

/// Progress sink that remembers everything it was told.
#[derive(Default)]
pub struct RecordingProgress {
    pub began: Option<usize>,
    pub items: Vec<usize>,
    pub failures: Vec<Failure>,
    pub finished: Option<usize>,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, limit: usize) {
        self.began = Some(limit);
    }
    fn item_done(&mut self, result: &SearchResult) {
        self.items.push(result.seq());
    }
    fn warn(&mut self, failure: &Failure) {
        self.failures.push(failure.clone());
    }
    fn finish(&mut self, collected: usize) {
        self.finished = Some(collected);
    }
}

/// Listing item with the same nesting the live search page uses.
pub fn listing_item(href: &str, title: &str, author: &str, date: &str) -> String {
    format!(
        r#"<li class="bx">
             <div class="user_box"><div class="user_box_inner"><div class="user_info">
               <a class="name" href="{href}">{author}</a><span class="sub">{date}</span>
             </div></div></div>
             <div class="detail_box"><div class="title_area"><a class="title_link" href="{href}">{title}</a></div></div>
           </li>"#
    )
}

pub fn listing_page(items: &[String]) -> String {
    format!(
        r#"<!doctype html><html><body><div class="api_subject_bx"><ul class="lst_view">{}</ul></div></body></html>"#,
        items.concat()
    )
}

/// Trusted item number `n`: link `https://blog.naver.com/user{n}/{n}`.
pub fn trusted(n: usize) -> String {
    listing_item(
        &desktop_link(n),
        &format!("Post {n}"),
        &format!("user{n}"),
        "2024.01.01.",
    )
}

pub fn untrusted(n: usize) -> String {
    listing_item(
        &format!("https://cafe.example.com/post/{n}"),
        &format!("Elsewhere {n}"),
        "someone",
        "2024.01.01.",
    )
}

pub fn desktop_link(n: usize) -> String {
    format!("https://blog.naver.com/user{n}/{n}")
}

pub fn mobile_link(n: usize) -> String {
    format!("https://m.blog.naver.com/user{n}/{n}")
}

/// Mobile post page, new editor layout.
pub fn post_page(parts: &[&str]) -> String {
    let comps: String = parts
        .iter()
        .map(|p| format!(r#"<div class="se-component se-text"><p>{p}</p></div>"#))
        .collect();
    format!(
        r#"<html><body><div id="viewTypeSelector"><div class="wrap"><div class="se-main-container">{comps}</div></div></div></body></html>"#
    )
}

/// Mobile post page, old editor layout.
pub fn old_post_page(text: &str) -> String {
    format!(r#"<html><body><div class="se_component_wrap"><p>{text}</p></div></body></html>"#)
}
