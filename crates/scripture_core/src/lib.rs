//! scripture_core - canonical address resolution and text normalization.
//!
//! Pure domain logic with no transport and no storage. The text-module engine
//! is consumed through the port traits in [`ports`]; the server crate wires a
//! concrete engine in at startup and talks to [`service::ScriptureService`].
//!
//! ```text
//!   HTTP handler ──► ScriptureService ──► AddressResolver ──► Versification
//!                          │                                     (port)
//!                          ├──► TextModule (render / search)     (port)
//!                          ├──► normalize()
//!                          └──► MarkupFilter                     (port)
//! ```

pub mod error;
pub mod normalize;
pub mod ports;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::ScriptureError;
pub use normalize::normalize;
pub use ports::{
    EngineError, MarkupFilter, SearchHit, SearchOptions, Testament, TextModule, Versification,
    VerseKey,
};
pub use registry::ModuleRegistry;
pub use resolver::{AddressResolver, BookAddress, ChapterAddress, VerseAddress};
pub use service::{QueryService, ScriptureService};
