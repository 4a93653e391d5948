//! Test doubles for the engine ports.

use crate::ports::{
    EngineError, MarkupFilter, SearchHit, SearchOptions, Testament, TextModule, Versification,
    VerseKey,
};

struct FakeBook {
    testament: Testament,
    name: &'static str,
    abbrev: &'static str,
    verses_per_chapter: Vec<u32>,
}

/// Tiny canon: Genesis (2 chapters), Exodus (no chapters), Matthew (1 chapter).
pub struct FakeCanon {
    books: Vec<FakeBook>,
}

impl FakeCanon {
    pub fn sample() -> Self {
        Self {
            books: vec![
                FakeBook {
                    testament: Testament::Old,
                    name: "Genesis",
                    abbrev: "Gen",
                    verses_per_chapter: vec![3, 2],
                },
                FakeBook {
                    testament: Testament::Old,
                    name: "Exodus",
                    abbrev: "Exod",
                    verses_per_chapter: vec![],
                },
                FakeBook {
                    testament: Testament::New,
                    name: "Matthew",
                    abbrev: "Matt",
                    verses_per_chapter: vec![2],
                },
            ],
        }
    }

    pub fn old_only() -> Self {
        let mut canon = Self::sample();
        canon.books.retain(|b| b.testament == Testament::Old);
        canon
    }

    fn find(&self, testament: Testament, book: u32) -> Option<&FakeBook> {
        let index = usize::try_from(book).ok()?.checked_sub(1)?;
        self.books
            .iter()
            .filter(|b| b.testament == testament)
            .nth(index)
    }
}

impl Versification for FakeCanon {
    fn book_count(&self, testament: Testament) -> u32 {
        self.books.iter().filter(|b| b.testament == testament).count() as u32
    }

    fn book_name(&self, testament: Testament, book: u32) -> Option<String> {
        self.find(testament, book).map(|b| b.name.to_owned())
    }

    fn book_abbrev(&self, testament: Testament, book: u32) -> Option<String> {
        self.find(testament, book).map(|b| b.abbrev.to_owned())
    }

    fn chapter_max(&self, testament: Testament, book: u32) -> u32 {
        self.find(testament, book)
            .map(|b| b.verses_per_chapter.len() as u32)
            .unwrap_or(0)
    }

    fn verse_max(&self, testament: Testament, book: u32, chapter: u32) -> u32 {
        self.find(testament, book)
            .and_then(|b| b.verses_per_chapter.get(chapter.checked_sub(1)? as usize))
            .copied()
            .unwrap_or(0)
    }
}

pub struct FakeModule {
    name: String,
    hits: Vec<SearchHit>,
    fail_render: bool,
}

impl FakeModule {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            hits: Vec::new(),
            fail_render: false,
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            fail_render: true,
            ..Self::named(name)
        }
    }

    pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.hits = hits;
        self
    }
}

impl TextModule for FakeModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn render_text(&self, key: &VerseKey) -> Result<String, EngineError> {
        if self.fail_render {
            return Err(EngineError::Render(format!("cannot read {key:?}")));
        }
        let text = match (key.chapter, key.verse) {
            (1, 1) => "  In the beginning ".to_owned(),
            (1, 2) => r#"and there <transChange type="added">was</transChange> light"#.to_owned(),
            (c, v) => format!("<w>verse</w> {c}:{v}"),
        };
        Ok(text)
    }

    fn search(&self, pattern: &str, _options: &SearchOptions) -> Result<Vec<SearchHit>, EngineError> {
        // stand-in for a regex compile error
        if pattern.matches('(').count() != pattern.matches(')').count() {
            return Err(EngineError::InvalidPattern(format!("unbalanced group in {pattern}")));
        }
        Ok(self.hits.clone())
    }
}

/// Drops anything between angle brackets.
pub struct TagStripper;

impl MarkupFilter for TagStripper {
    fn filter(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_tag = false;
        for c in text.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.trim().to_owned()
    }
}
