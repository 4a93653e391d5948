//! Server configuration from environment variables.
//!
//!   SCRIPTURE_LIBRARY_PATH - library directory (default: ./library)
//!   SCRIPTURE_BIND_ADDR    - listen address (default: 0.0.0.0:8081)

use std::path::PathBuf;

pub const DEFAULT_LIBRARY_PATH: &str = "./library";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub library_path: PathBuf,
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            library_path: get("SCRIPTURE_LIBRARY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_PATH)),
            bind_addr: get("SCRIPTURE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        }
    }
}
