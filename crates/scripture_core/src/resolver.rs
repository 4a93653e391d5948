//! Canonical address resolver.
//!
//! Maps client identifiers (book name or abbreviation, chapter and verse
//! numbers) onto validated positions in the two-testament address space.
//! All cardinalities come from the injected [`Versification`]; the resolver
//! keeps no position state of its own.

use std::sync::Arc;

use crate::error::ScriptureError;
use crate::ports::{Testament, Versification, VerseKey};

pub type Result<T> = std::result::Result<T, ScriptureError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAddress {
    pub testament: Testament,
    /// 1-based within `testament`.
    pub book_number: u32,
    /// Contiguous across both testaments, starting at 1.
    pub number: u32,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterAddress {
    pub book: BookAddress,
    pub chapter_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseAddress {
    pub chapter: ChapterAddress,
    pub verse_number: u32,
}

impl ChapterAddress {
    /// Key for verse `verse` of this chapter.
    pub fn key(&self, verse: u32) -> VerseKey {
        VerseKey::new(
            self.book.testament,
            self.book.book_number,
            self.chapter_number,
            verse,
        )
    }
}

impl VerseAddress {
    pub fn key(&self) -> VerseKey {
        self.chapter.key(self.verse_number)
    }
}

#[derive(Clone)]
pub struct AddressResolver {
    versification: Arc<dyn Versification>,
}

impl AddressResolver {
    pub fn new(versification: Arc<dyn Versification>) -> Self {
        Self { versification }
    }

    fn address(&self, testament: Testament, book_number: u32) -> BookAddress {
        let offset = match testament {
            Testament::Old => 0,
            Testament::New => self.versification.book_count(Testament::Old),
        };
        BookAddress {
            testament,
            book_number,
            number: offset + book_number,
            name: self
                .versification
                .book_name(testament, book_number)
                .unwrap_or_default(),
            abbreviation: self
                .versification
                .book_abbrev(testament, book_number)
                .unwrap_or_default(),
        }
    }

    /// Every book, Old Testament first, in engine order.
    pub fn list_books(&self) -> Vec<BookAddress> {
        Testament::ALL
            .iter()
            .flat_map(|&testament| {
                (1..=self.versification.book_count(testament))
                    .map(move |book_number| self.address(testament, book_number))
            })
            .collect()
    }

    /// Exact, case-sensitive match on abbreviation or full name. First match
    /// in canonical order wins.
    pub fn resolve_book(&self, identifier: &str) -> Result<BookAddress> {
        for testament in Testament::ALL {
            for book_number in 1..=self.versification.book_count(testament) {
                let abbrev = self.versification.book_abbrev(testament, book_number);
                let name = self.versification.book_name(testament, book_number);
                if abbrev.as_deref() == Some(identifier) || name.as_deref() == Some(identifier) {
                    return Ok(self.address(testament, book_number));
                }
            }
        }
        tracing::debug!(identifier, "Book identifier did not resolve");
        Err(ScriptureError::book_not_found())
    }

    pub fn resolve_chapter(&self, book: &BookAddress, chapter_number: i64) -> Result<ChapterAddress> {
        let max = self.chapter_max(book);
        match u32::try_from(chapter_number) {
            Ok(n) if n >= 1 && n <= max => Ok(ChapterAddress {
                book: book.clone(),
                chapter_number: n,
            }),
            _ => Err(ScriptureError::chapter_not_found()),
        }
    }

    pub fn resolve_verse(&self, chapter: &ChapterAddress, verse_number: i64) -> Result<VerseAddress> {
        let max = self.verse_max(chapter);
        match u32::try_from(verse_number) {
            Ok(n) if n >= 1 && n <= max => Ok(VerseAddress {
                chapter: chapter.clone(),
                verse_number: n,
            }),
            _ => Err(ScriptureError::verse_not_found()),
        }
    }

    pub fn list_chapters(&self, book: &BookAddress) -> Vec<u32> {
        (1..=self.chapter_max(book)).collect()
    }

    pub fn list_verse_numbers(&self, chapter: &ChapterAddress) -> Vec<u32> {
        (1..=self.verse_max(chapter)).collect()
    }

    fn chapter_max(&self, book: &BookAddress) -> u32 {
        self.versification
            .chapter_max(book.testament, book.book_number)
    }

    fn verse_max(&self, chapter: &ChapterAddress) -> u32 {
        self.versification.verse_max(
            chapter.book.testament,
            chapter.book.book_number,
            chapter.chapter_number,
        )
    }
}
