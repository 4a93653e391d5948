//! Plain-text markup filter.
//!
//! Drops every markup tag, keeps tag content, decodes the basic XML entities
//! and collapses runs of whitespace.

use regex::Regex;
use scripture_core::MarkupFilter;

pub struct PlainTextFilter {
    tag: Regex,
    space: Regex,
}

impl PlainTextFilter {
    pub fn new() -> Self {
        Self {
            tag: Regex::new(r"<[^>]*>").expect("tag pattern is valid"),
            space: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        }
    }
}

impl Default for PlainTextFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupFilter for PlainTextFilter {
    fn filter(&self, text: &str) -> String {
        let stripped = self.tag.replace_all(text, "");
        let decoded = stripped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&");
        self.space.replace_all(decoded.trim(), " ").into_owned()
    }
}
