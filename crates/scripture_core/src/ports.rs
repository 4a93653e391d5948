//! Port traits for the text-module engine.
//!
//! The engine owns storage, versification, rendering and search. This crate
//! only consumes the surface below. Positions are passed as [`VerseKey`]
//! values, never as a cursor held by the engine, so one module handle can be
//! shared by concurrent requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two canonical scripture divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Canonical iteration order: Old before New.
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// Client-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A position in the canonical address space, built fresh for each engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseKey {
    pub testament: Testament,
    /// 1-based within the testament.
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(testament: Testament, book: u32, chapter: u32, verse: u32) -> Self {
        Self {
            testament,
            book,
            chapter,
            verse,
        }
    }
}

/// Options for a module-wide search. `Default` is what the query service uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_insensitive: bool,
}

/// A single search hit as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub key: VerseKey,
    /// Human-readable reference, e.g. `Genesis 1:1`.
    pub reference: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("render failed: {0}")]
    Render(String),
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
    #[error("search failed: {0}")]
    Search(String),
}

/// Book/chapter/verse cardinalities and book metadata.
///
/// Out-of-range arguments return zero counts or `None`, never panic.
pub trait Versification: Send + Sync {
    fn book_count(&self, testament: Testament) -> u32;

    fn book_name(&self, testament: Testament, book: u32) -> Option<String>;

    fn book_abbrev(&self, testament: Testament, book: u32) -> Option<String>;

    fn chapter_max(&self, testament: Testament, book: u32) -> u32;

    fn verse_max(&self, testament: Testament, book: u32, chapter: u32) -> u32;
}

/// An installed scripture text source.
pub trait TextModule: Send + Sync {
    fn name(&self) -> &str;

    /// Marked-up text at `key`.
    fn render_text(&self, key: &VerseKey) -> Result<String, EngineError>;

    /// Regex search over the whole module, hits in engine order.
    fn search(&self, pattern: &str, options: &SearchOptions) -> Result<Vec<SearchHit>, EngineError>;
}

/// Markup filter configured for plain-text output.
pub trait MarkupFilter: Send + Sync {
    fn filter(&self, text: &str) -> String;
}
