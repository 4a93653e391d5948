//! scripture_store - file-backed text-module engine.
//!
//! Implements the `scripture_core` ports over a library directory of YAML
//! module files:
//!
//! ```text
//! <library>/
//!   mods.d/
//!     kjv.yaml
//!     web.yaml
//! ```
//!
//! Modules are enumerated sorted by name. The canon (book list and
//! per-chapter verse counts) is taken from the first enumerated module.
//!
//! # Usage
//!
//! ```ignore
//! let library = Library::load("./library")?;
//! let service = QueryService::new(
//!     library.registry(),
//!     library.canon(),
//!     Arc::new(PlainTextFilter::new()),
//! );
//! ```

pub mod canon;
pub mod error;
pub mod filter;
pub mod library;
pub mod module;
pub mod module_file;

pub use canon::Canon;
pub use error::StoreError;
pub use filter::PlainTextFilter;
pub use library::Library;
pub use module::YamlModule;
pub use module_file::{BookDef, ModuleFile};
