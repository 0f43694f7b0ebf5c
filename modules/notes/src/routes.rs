//! Axum route handlers for the notes HTTP API.

use crate::error::NoteError;
use crate::openapi::openapi_document;
use crate::store::NoteStore;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use notes_types::*;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
    pub store: NoteStore,
    pub start_time: Instant,
    pub mutation_count: AtomicU64,
    pub openapi: Value,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            start_time: Instant::now(),
            mutation_count: AtomicU64::new(0),
            openapi: openapi_document(),
        }
    }

    fn record_mutation(&self) {
        self.mutation_count.fetch_add(1, Ordering::Relaxed);
    }
}

/// Full application router. Note routes are served both at the root and
/// under `/api`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    note_routes(note_routes(Router::new(), ""), "/api")
        .route("/api/health", get(health))
        .route("/rpc/status", get(status))
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
}

fn note_routes(router: Router<Arc<AppState>>, prefix: &str) -> Router<Arc<AppState>> {
    router
        .route(
            &format!("{}/notes", prefix),
            get(list_notes).post(create_note),
        )
        .route(
            &format!("{}/notes/:id", prefix),
            get(get_note).put(replace_note).delete(delete_note),
        )
}

/// Turn the raw `{id}` path segment into a `NoteId`. Anything that is not a
/// base-10 integer cannot name a note, so it is reported as not found.
fn parse_id(raw: &str) -> Result<NoteId, NoteError> {
    raw.parse::<NoteId>().map_err(|_| {
        log::debug!("Unparsable note id {:?}", raw);
        NoteError::NotFound
    })
}

/// Pull a string `title` out of a JSON object body. Missing, null and
/// non-string titles are all rejected.
fn title_field(body: Result<Json<Value>, JsonRejection>) -> Result<String, NoteError> {
    let Json(body) = body.map_err(|e| NoteError::InvalidArgument(e.body_text()))?;
    if !body.is_object() {
        return Err(NoteError::title_required());
    }
    serde_json::from_value::<NoteRequest>(body)
        .map(|req| req.title)
        .map_err(|_| NoteError::title_required())
}

// GET /notes
async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<Note>> {
    Json(state.store.list())
}

// POST /notes
async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), NoteError> {
    let title = title_field(body)?;
    let note = state.store.create(&title)?;
    state.record_mutation();
    Ok((StatusCode::CREATED, Json(note)))
}

// GET /notes/{id}
async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Note>, NoteError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.store.get(id)?))
}

// PUT /notes/{id}
async fn replace_note(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Note>, NoteError> {
    let id = parse_id(&raw_id)?;
    let title = title_field(body);

    // The store rejects an unknown id before looking at the title, so a bad
    // body only surfaces once the note is known to exist.
    let note = state
        .store
        .replace(id, title.as_deref().unwrap_or_default())
        .map_err(|e| match (e, title) {
            (NoteError::NotFound, _) => NoteError::NotFound,
            (_, Err(body_err)) => body_err,
            (e, Ok(_)) => e,
        })?;
    state.record_mutation();
    Ok(Json(note))
}

// DELETE /notes/{id}
async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, NoteError> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id)?;
    state.record_mutation();
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/health
async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": VERSION
    }))
}

// GET /rpc/status
async fn status(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RpcResponse<ServiceStatus>>) {
    let status = ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_notes: state.store.len(),
        next_id: state.store.next_id(),
        total_mutations: state.mutation_count.load(Ordering::Relaxed),
    };

    (StatusCode::OK, Json(RpcResponse::ok(status)))
}

// Any path without a route, e.g. `/notes/`
async fn not_found() -> NoteError {
    NoteError::NotFound
}

// GET /api-docs/openapi.json
async fn openapi(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.openapi.clone())
}
