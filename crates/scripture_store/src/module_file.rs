//! On-disk module format.
//!
//! ```yaml
//! name: KJV
//! description: King James Version
//! books:
//!   - testament: old
//!     name: Genesis
//!     abbreviation: Gen
//!     chapters:
//!       - - "In the beginning God created the heaven and the earth."
//!         - "And the earth was without form, and void; ..."
//! ```
//!
//! Verse text is OSIS-style markup and is stored as-is; normalization happens
//! on the way out.

use std::path::Path;

use scripture_core::Testament;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleFile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub books: Vec<BookDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookDef {
    pub testament: Testament,
    pub name: String,
    pub abbreviation: String,
    /// `chapters[c - 1][v - 1]` is the markup for chapter `c`, verse `v`.
    #[serde(default)]
    pub chapters: Vec<Vec<String>>,
}

impl ModuleFile {
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let module: ModuleFile =
            serde_yaml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        module.validate()?;
        Ok(module)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Structural checks the engine relies on.
    ///
    /// Books must be grouped Old before New, and names and abbreviations must
    /// be non-empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        let invalid = |reason: String| StoreError::Invalid {
            module: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("module name is empty".into()));
        }

        let mut seen_new = false;
        for (i, book) in self.books.iter().enumerate() {
            if book.name.is_empty() || book.abbreviation.is_empty() {
                return Err(invalid(format!("book #{} has an empty name or abbreviation", i + 1)));
            }
            match book.testament {
                Testament::New => seen_new = true,
                Testament::Old if seen_new => {
                    return Err(invalid(format!(
                        "Old Testament book {} listed after a New Testament book",
                        book.name
                    )));
                }
                Testament::Old => {}
            }
        }
        Ok(())
    }
}
