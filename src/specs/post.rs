// src/specs/post.rs

use scraper::{Html, Selector};

use super::{selector, visible_text};
use crate::core::sanitize::joined_trimmed;
use crate::error::ScrapeError;

// New editor layout
const MAIN_CONTAINER: &str = "#viewTypeSelector > div > div.se-main-container";
const TEXT_PARTS: &str = "div.se-component.se-text, div.se-component.se-image div.se-caption";
// Old editor layout
const OLD_CONTAINER: &str = "div#viewTypeSelector, div.se_component_wrap";

const PART_SEPARATOR: &str = "\n\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    New,
    Old,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostBody {
    pub layout: Layout,
    pub text: String,
}

/// Pulls the readable body out of one mobile post page.
pub trait BodyParser {
    /// `Err(NotFound)` when neither layout's container is on the page.
    fn extract(&self, html: &str) -> Result<PostBody, ScrapeError>;
}

pub struct NaverPost {
    main: Selector,
    parts: Selector,
    old: Selector,
}

impl NaverPost {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            main: selector(MAIN_CONTAINER)?,
            parts: selector(TEXT_PARTS)?,
            old: selector(OLD_CONTAINER)?,
        })
    }
}

impl BodyParser for NaverPost {
    fn extract(&self, html: &str) -> Result<PostBody, ScrapeError> {
        let doc = Html::parse_document(html);

        if let Some(main) = doc.select(&self.main).next() {
            let text = main
                .select(&self.parts)
                .map(|part| joined_trimmed(visible_text(part)))
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(PART_SEPARATOR);
            return Ok(PostBody { layout: Layout::New, text });
        }

        match doc.select(&self.old).next() {
            Some(old) => Ok(PostBody { layout: Layout::Old, text: joined_trimmed(visible_text(old)) }),
            None => Err(ScrapeError::NotFound("post body container")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Result<PostBody, ScrapeError> {
        NaverPost::new().unwrap().extract(html)
    }

    #[test]
    fn new_layout_joins_text_and_captions_in_order() {
        let html = r#"
            <html><body>
              <div id="viewTypeSelector"><div class="post_ct">
                <div class="se-main-container">
                  <div class="se-component se-text"><p> First paragraph. </p></div>
                  <div class="se-component se-image">
                    <img src="a.jpg">
                    <div class="se-caption"><p>  A caption  </p></div>
                  </div>
                  <div class="se-component se-text"><p>   </p></div>
                  <div class="se-component se-text"><p>Second</p><p> paragraph.</p></div>
                </div>
              </div></div>
            </body></html>
        "#;
        let body = extract(html).unwrap();
        assert_eq!(body.layout, Layout::New);
        assert_eq!(body.text, "First paragraph.\n\nA caption\n\nSecond paragraph.");
    }

    #[test]
    fn new_layout_without_parts_is_empty_text() {
        let html = r#"
            <div id="viewTypeSelector"><div><div class="se-main-container">
              <div class="se-component se-image"><img src="a.jpg"></div>
            </div></div></div>
        "#;
        let body = extract(html).unwrap();
        assert_eq!(body.layout, Layout::New);
        assert_eq!(body.text, "");
    }

    #[test]
    fn old_layout_fallback_returns_full_text() {
        let html = r#"
            <html><body>
              <div class="se_component_wrap">
                <p>  Old style post </p>
              </div>
            </body></html>
        "#;
        let body = extract(html).unwrap();
        assert_eq!(body.layout, Layout::Old);
        assert_eq!(body.text, "Old style post");
    }

    #[test]
    fn view_type_selector_without_main_container_is_old_layout() {
        let html = r#"<div id="viewTypeSelector"><p>Legacy body</p></div>"#;
        let body = extract(html).unwrap();
        assert_eq!(body.layout, Layout::Old);
        assert_eq!(body.text, "Legacy body");
    }

    #[test]
    fn script_and_style_contents_are_not_body_text() {
        let html = r#"
            <div class="se_component_wrap"><p>Hello</p><script>var tracking = 1;</script><style>p{color:red}</style></div>
        "#;
        assert_eq!(extract(html).unwrap().text, "Hello");

        let html = r#"
            <div id="viewTypeSelector"><div><div class="se-main-container">
              <div class="se-component se-text"><p>Text</p><script>ad()</script></div>
            </div></div></div>
        "#;
        assert_eq!(extract(html).unwrap().text, "Text");
    }

    #[test]
    fn no_container_is_not_found() {
        let err = extract("<html><body><p>nothing here</p></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound(_)));
    }
}
