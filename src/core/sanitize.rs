// src/core/sanitize.rs

use crate::config::consts::FALLBACK_STEM;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trim every text node, drop the empty ones, glue the rest with no separator.
pub fn join_stripped<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Concatenate every text node as-is, then trim the whole.
pub fn joined_trimmed<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let all: String = texts.into_iter().collect();
    all.trim().to_string()
}

/// Keyword → file stem. Keeps Hangul and spaces; drops path separators,
/// reserved filename characters and control characters.
pub fn sanitize_keyword_filename(keyword: &str) -> String {
    let cleaned: String = keyword
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();
    let out = normalize_ws(&cleaned);
    let out = out.trim_matches(|c| c == '.' || c == '_').to_string();
    if out.is_empty() { FALLBACK_STEM.to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_stripped_drops_blank_nodes() {
        let nodes = ["  Best ", "\n", "coffee", "  ", " beans\t"];
        assert_eq!(join_stripped(nodes), "Bestcoffeebeans");
    }

    #[test]
    fn joined_trimmed_keeps_inner_spacing() {
        let nodes = ["\n  Hello ", "world  \n"];
        assert_eq!(joined_trimmed(nodes), "Hello world");
    }

    #[test]
    fn keyword_filename_variants() {
        assert_eq!(sanitize_keyword_filename("coffee"), "coffee");
        assert_eq!(sanitize_keyword_filename("  커피   원두 "), "커피 원두");
        assert_eq!(sanitize_keyword_filename("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_keyword_filename("../"), FALLBACK_STEM);
        assert_eq!(sanitize_keyword_filename(""), FALLBACK_STEM);
    }
}
