//! scripture_server - REST binding for the scripture query service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
