//! In-memory text module loaded from a YAML module file.
//!
//! Immutable after construction, so a single instance is shared by every
//! request without locking.

use regex::RegexBuilder;
use scripture_core::{
    EngineError, MarkupFilter, SearchHit, SearchOptions, Testament, TextModule, VerseKey,
};

use crate::filter::PlainTextFilter;
use crate::module_file::{BookDef, ModuleFile};

/// Plain text of one verse, precomputed for search.
struct IndexedVerse {
    key: VerseKey,
    reference: String,
    plain: String,
}

pub struct YamlModule {
    name: String,
    description: Option<String>,
    old: Vec<BookDef>,
    new: Vec<BookDef>,
    index: Vec<IndexedVerse>,
}

impl YamlModule {
    pub fn new(file: ModuleFile) -> Self {
        let (old, new): (Vec<BookDef>, Vec<BookDef>) = file
            .books
            .into_iter()
            .partition(|b| b.testament == Testament::Old);
        let mut module = Self {
            name: file.name,
            description: file.description,
            old,
            new,
            index: Vec::new(),
        };

        let filter = PlainTextFilter::new();
        module.index = module
            .entries()
            .map(|(key, book, text)| IndexedVerse {
                key,
                reference: format!("{} {}:{}", book.name, key.chapter, key.verse),
                plain: filter.filter(text),
            })
            .collect();
        module
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Book layout in canonical order, Old Testament first.
    pub fn books(&self) -> impl Iterator<Item = &BookDef> {
        self.old.iter().chain(self.new.iter())
    }

    fn book(&self, testament: Testament, book: u32) -> Option<&BookDef> {
        let books = match testament {
            Testament::Old => &self.old,
            Testament::New => &self.new,
        };
        books.get((book as usize).checked_sub(1)?)
    }

    fn entry(&self, key: &VerseKey) -> Option<&str> {
        let book = self.book(key.testament, key.book)?;
        let chapter = book.chapters.get((key.chapter as usize).checked_sub(1)?)?;
        chapter
            .get((key.verse as usize).checked_sub(1)?)
            .map(String::as_str)
    }

    /// Every (key, markup) entry in canonical order.
    fn entries(&self) -> impl Iterator<Item = (VerseKey, &BookDef, &str)> {
        Testament::ALL.into_iter().flat_map(move |testament| {
            let books = match testament {
                Testament::Old => &self.old,
                Testament::New => &self.new,
            };
            books.iter().enumerate().flat_map(move |(b, book)| {
                book.chapters.iter().enumerate().flat_map(move |(c, verses)| {
                    verses.iter().enumerate().map(move |(v, text)| {
                        let key = VerseKey::new(
                            testament,
                            b as u32 + 1,
                            c as u32 + 1,
                            v as u32 + 1,
                        );
                        (key, book, text.as_str())
                    })
                })
            })
        })
    }
}

impl TextModule for YamlModule {
    fn name(&self) -> &str {
        &self.name
    }

    /// A key with no entry in this module renders as empty text.
    fn render_text(&self, key: &VerseKey) -> Result<String, EngineError> {
        Ok(self.entry(key).unwrap_or_default().to_owned())
    }

    /// Matches `pattern` against the plain-text form of every verse.
    ///
    /// Any pattern the regex builder refuses, including one whose compiled
    /// form exceeds the size limit, is an invalid pattern.
    fn search(&self, pattern: &str, options: &SearchOptions) -> Result<Vec<SearchHit>, EngineError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .build()
            .map_err(|e| EngineError::InvalidPattern(e.to_string()))?;

        let hits: Vec<SearchHit> = self
            .index
            .iter()
            .filter(|verse| regex.is_match(&verse.plain))
            .map(|verse| SearchHit {
                key: verse.key,
                reference: verse.reference.clone(),
            })
            .collect();

        tracing::debug!(module = %self.name, pattern, hits = hits.len(), "Regex search");
        Ok(hits)
    }
}
