//! Notes Service — in-memory notes CRUD over HTTP JSON.
//!
//! Notes live only as long as the process. Routes are served both at
//! `/notes` and `/api/notes`, with an OpenAPI document at
//! `/api-docs/openapi.json`.
//!
//! Default: http://127.0.0.1:3000/

mod config;
mod error;
mod openapi;
mod routes;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use store::NoteStore;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Notes Service v{}", routes::VERSION);

    let state = Arc::new(AppState::new(NoteStore::new()));
    let app = routes::router(Arc::clone(&state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        log::error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    log::info!("Notes Service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !state.store.is_empty() {
        log::info!("Discarding {} in-memory notes", state.store.len());
    }
    log::info!("Notes Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
