//! Versification derived from a module's book layout.

use scripture_core::{Testament, Versification};

use crate::module_file::BookDef;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CanonBook {
    name: String,
    abbreviation: String,
    /// Verse count per chapter.
    verse_counts: Vec<u32>,
}

/// Book list and chapter/verse cardinalities for both testaments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canon {
    old: Vec<CanonBook>,
    new: Vec<CanonBook>,
}

impl Canon {
    pub fn from_books(books: &[BookDef]) -> Self {
        let mut canon = Self::default();
        for book in books {
            let entry = CanonBook {
                name: book.name.clone(),
                abbreviation: book.abbreviation.clone(),
                verse_counts: book.chapters.iter().map(|c| c.len() as u32).collect(),
            };
            match book.testament {
                Testament::Old => canon.old.push(entry),
                Testament::New => canon.new.push(entry),
            }
        }
        canon
    }

    fn books(&self, testament: Testament) -> &[CanonBook] {
        match testament {
            Testament::Old => &self.old,
            Testament::New => &self.new,
        }
    }

    fn book(&self, testament: Testament, book: u32) -> Option<&CanonBook> {
        let index = (book as usize).checked_sub(1)?;
        self.books(testament).get(index)
    }
}

impl Versification for Canon {
    fn book_count(&self, testament: Testament) -> u32 {
        self.books(testament).len() as u32
    }

    fn book_name(&self, testament: Testament, book: u32) -> Option<String> {
        self.book(testament, book).map(|b| b.name.clone())
    }

    fn book_abbrev(&self, testament: Testament, book: u32) -> Option<String> {
        self.book(testament, book).map(|b| b.abbreviation.clone())
    }

    fn chapter_max(&self, testament: Testament, book: u32) -> u32 {
        self.book(testament, book)
            .map(|b| b.verse_counts.len() as u32)
            .unwrap_or(0)
    }

    fn verse_max(&self, testament: Testament, book: u32, chapter: u32) -> u32 {
        let Some(b) = self.book(testament, book) else {
            return 0;
        };
        (chapter as usize)
            .checked_sub(1)
            .and_then(|i| b.verse_counts.get(i))
            .copied()
            .unwrap_or(0)
    }
}
