//! HTTP server for the contacts API and the UI bundle.
//!
//! Routes:
//! - `GET /api/contacts?page=&limit=` list one page, newest first
//! - `POST /api/contacts` create a contact
//! - `DELETE /api/contacts/:id` delete a contact
//! - anything else, including other methods on the API paths: files from the
//!   static bundle, falling back to `index.html`

mod handlers;
mod middleware;
mod static_files;

use crate::config::Config;
use crate::error::StoreResult;
use crate::metrics::Metrics;
use crate::services::{ContactService, ContactServiceImpl};
use crate::store::{ContactStore, JsonFileContactStore, MemoryContactStore};
use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{delete, get};
use axum::Router;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Shared state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    pub metrics: Metrics,
    pub static_dir: PathBuf,
    pub max_page_limit: u64,
    pub max_body_bytes: usize,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>, metrics: Metrics, config: &Config) -> Self {
        Self {
            service,
            metrics,
            static_dir: config.static_dir.clone(),
            max_page_limit: config.max_page_limit,
            max_body_bytes: config.max_body_bytes,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    /// State backed by `store`, with a fresh service and metrics collector.
    pub fn with_store(store: Arc<dyn ContactStore>, config: &Config) -> Self {
        let metrics = Metrics::new();
        let service = Arc::new(ContactServiceImpl::new(store, metrics.clone()));
        Self::new(service, metrics, config)
    }
}

/// Build the router with every route and middleware layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .fallback(static_files::serve_static),
        )
        .route(
            "/api/contacts/:id",
            delete(handlers::delete_contact).fallback(static_files::serve_static),
        )
        .fallback(static_files::serve_static)
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .with_state(state)
}

/// Open the store selected by the configuration.
pub async fn open_store(config: &Config) -> StoreResult<Arc<dyn ContactStore>> {
    match &config.data_file {
        Some(path) => Ok(Arc::new(JsonFileContactStore::open(path.clone()).await?)),
        None => {
            tracing::warn!("CONTACTS_DATA_FILE not set, contacts are kept in memory only");
            Ok(Arc::new(MemoryContactStore::new()))
        }
    }
}

/// Run the server until Ctrl-C or SIGTERM.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let store = open_store(&config)
        .await
        .context("Failed to open contact store")?;
    let state = AppState::with_store(store, &config);
    let metrics = state.metrics.clone();
    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!(
        addr = %bind_addr,
        static_dir = %config.static_dir.display(),
        "Contact book server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!(metrics = %metrics.summary(), "Server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutdown signal received");
}
