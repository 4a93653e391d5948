//! scripture_server - REST server for scripture text and search.
//!
//! Reads config from env vars (a `.env` file is honoured):
//!   SCRIPTURE_LIBRARY_PATH - library directory holding `mods.d/` (default: ./library)
//!   SCRIPTURE_BIND_ADDR    - listen address (default: 0.0.0.0:8081)
//!   RUST_LOG               - tracing filter (default: info,scripture_server=debug)

use std::sync::Arc;

use anyhow::Context;
use scripture_core::{QueryService, ScriptureService};
use scripture_server::config::ServerConfig;
use scripture_server::router::build_router;
use scripture_store::{Library, PlainTextFilter};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scripture_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(path = %config.library_path.display(), "Loading scripture library");

    // Installed modules are read once; changes need a restart.
    let library = Library::load(&config.library_path)
        .with_context(|| format!("failed to load library at {}", config.library_path.display()))?;

    let service: Arc<dyn ScriptureService> = Arc::new(
        QueryService::new(
            library.registry(),
            library.canon(),
            Arc::new(PlainTextFilter::new()),
        )
        .with_library_path(library.path().display().to_string()),
    );

    let app = build_router(service);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("scripture_server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
