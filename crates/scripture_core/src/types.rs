//! Client-facing records returned by the query service.

use serde::{Deserialize, Serialize};

use crate::resolver::{BookAddress, VerseAddress};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub number: u32,
    pub abbreviation: String,
    /// `"OT"` or `"NT"`.
    pub testament: String,
}

impl From<BookAddress> for Book {
    fn from(address: BookAddress) -> Self {
        Self {
            name: address.name,
            number: address.number,
            abbreviation: address.abbreviation,
            testament: address.testament.label().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

/// A rendered verse before it is reduced to the client record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseText {
    pub address: VerseAddress,
    pub raw_markup: String,
    pub display_text: String,
}

impl From<VerseText> for Verse {
    fn from(text: VerseText) -> Self {
        Self {
            number: text.address.verse_number,
            text: text.display_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub reference: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub modules_found: Vec<String>,
    pub library_path: String,
}
