use thiserror::Error;

use crate::ports::EngineError;

#[derive(Debug, Error)]
pub enum ScriptureError {
    #[error("No Bible modules found")]
    NoModulesAvailable,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("engine failure: {0}")]
    EngineFailure(#[from] EngineError),
}

impl ScriptureError {
    pub fn book_not_found() -> Self {
        Self::NotFound("Book not found".into())
    }

    pub fn chapter_not_found() -> Self {
        Self::NotFound("Chapter not found".into())
    }

    pub fn verse_not_found() -> Self {
        Self::NotFound("Verse not found".into())
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::NoModulesAvailable => 404,
            Self::NotFound(_) => 404,
            Self::InvalidArgument(_) => 400,
            Self::EngineFailure(_) => 500,
        }
    }
}
