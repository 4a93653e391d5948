//! Query service - one operation per client need.
//!
//! Composes the module registry, the address resolver, the normalizer and the
//! engine's plain-text markup filter. Every module-backed operation checks the
//! registry first and fails with [`ScriptureError::NoModulesAvailable`] before
//! doing anything else. Queries always run against the first enumerated
//! module; there is no module selection.

use std::sync::Arc;

use crate::{
    error::ScriptureError,
    normalize::normalize,
    ports::{EngineError, MarkupFilter, SearchOptions, TextModule, Versification},
    registry::ModuleRegistry,
    resolver::{AddressResolver, ChapterAddress, VerseAddress},
    types::{Book, Chapter, HealthStatus, SearchResult, Verse, VerseText, Version},
};

pub type Result<T> = std::result::Result<T, ScriptureError>;

/// The service interface the HTTP layer talks to.
pub trait ScriptureService: Send + Sync {
    /// Installed module identifiers, in enumeration order.
    fn versions(&self) -> Result<Vec<Version>>;

    /// Every book, Old Testament first, numbered contiguously from 1.
    fn books(&self) -> Result<Vec<Book>>;

    /// A single book by abbreviation or full name.
    fn book(&self, book_id: &str) -> Result<Book>;

    fn chapters(&self, book_id: &str) -> Result<Vec<Chapter>>;

    /// All verses of a chapter, rendered and normalized.
    fn verses(&self, book_id: &str, chapter: i64) -> Result<Vec<Verse>>;

    fn verse(&self, book_id: &str, chapter: i64, verse: i64) -> Result<Verse>;

    /// Regex search over the whole default module, in engine order.
    fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Liveness report. Never fails.
    fn health(&self) -> HealthStatus;
}

pub struct QueryService {
    registry: Arc<ModuleRegistry>,
    resolver: AddressResolver,
    filter: Arc<dyn MarkupFilter>,
    library_path: String,
}

impl QueryService {
    pub fn new(
        registry: Arc<ModuleRegistry>,
        versification: Arc<dyn Versification>,
        filter: Arc<dyn MarkupFilter>,
    ) -> Self {
        Self {
            registry,
            resolver: AddressResolver::new(versification),
            filter,
            library_path: String::new(),
        }
    }

    /// Record where modules were loaded from, for the health report.
    pub fn with_library_path(mut self, path: impl Into<String>) -> Self {
        self.library_path = path.into();
        self
    }

    fn module(&self) -> Result<Arc<dyn TextModule>> {
        self.registry
            .default_module()
            .ok_or(ScriptureError::NoModulesAvailable)
    }

    fn chapter_address(&self, book_id: &str, chapter: i64) -> Result<ChapterAddress> {
        let book = self.resolver.resolve_book(book_id)?;
        self.resolver.resolve_chapter(&book, chapter)
    }

    fn render(&self, module: &dyn TextModule, address: VerseAddress) -> Result<VerseText> {
        let raw_markup = module.render_text(&address.key())?;
        let display_text = normalize(&raw_markup);
        Ok(VerseText {
            address,
            raw_markup,
            display_text,
        })
    }
}

impl ScriptureService for QueryService {
    fn versions(&self) -> Result<Vec<Version>> {
        if self.registry.is_empty() {
            return Err(ScriptureError::NoModulesAvailable);
        }
        Ok(self
            .registry
            .names()
            .into_iter()
            .map(|name| Version {
                name: name.to_owned(),
            })
            .collect())
    }

    fn books(&self) -> Result<Vec<Book>> {
        self.module()?;
        Ok(self
            .resolver
            .list_books()
            .into_iter()
            .map(Book::from)
            .collect())
    }

    fn book(&self, book_id: &str) -> Result<Book> {
        self.module()?;
        self.resolver.resolve_book(book_id).map(Book::from)
    }

    fn chapters(&self, book_id: &str) -> Result<Vec<Chapter>> {
        self.module()?;
        let book = self.resolver.resolve_book(book_id)?;
        Ok(self
            .resolver
            .list_chapters(&book)
            .into_iter()
            .map(|number| Chapter { number })
            .collect())
    }

    fn verses(&self, book_id: &str, chapter: i64) -> Result<Vec<Verse>> {
        let module = self.module()?;
        let chapter = self.chapter_address(book_id, chapter)?;
        let texts = self
            .resolver
            .list_verse_numbers(&chapter)
            .into_iter()
            .map(|verse_number| {
                let address = VerseAddress {
                    chapter: chapter.clone(),
                    verse_number,
                };
                self.render(module.as_ref(), address)
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            module = module.name(),
            book = %chapter.book.abbreviation,
            chapter = chapter.chapter_number,
            count = texts.len(),
            rewritten = texts.iter().filter(|t| t.raw_markup != t.display_text).count(),
            "Rendered chapter"
        );
        Ok(texts.into_iter().map(Verse::from).collect())
    }

    fn verse(&self, book_id: &str, chapter: i64, verse: i64) -> Result<Verse> {
        let module = self.module()?;
        let chapter = self.chapter_address(book_id, chapter)?;
        let address = self.resolver.resolve_verse(&chapter, verse)?;
        self.render(module.as_ref(), address).map(Verse::from)
    }

    fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let module = self.module()?;
        if query.is_empty() {
            return Err(ScriptureError::InvalidArgument(
                "Query parameter is required".into(),
            ));
        }

        let hits = module
            .search(query, &SearchOptions::default())
            .map_err(|e| match e {
                EngineError::InvalidPattern(msg) => {
                    ScriptureError::InvalidArgument(format!("Invalid search pattern: {msg}"))
                }
                other => ScriptureError::EngineFailure(other),
            })?;

        let results = hits
            .into_iter()
            .map(|hit| -> Result<SearchResult> {
                let raw = module.render_text(&hit.key)?;
                Ok(SearchResult {
                    reference: hit.reference,
                    text: self.filter.filter(&raw),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(module = module.name(), query, hits = results.len(), "Search complete");
        Ok(results)
    }

    fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".into(),
            modules_found: self
                .registry
                .names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            library_path: self.library_path.clone(),
        }
    }
}
