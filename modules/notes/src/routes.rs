//! Axum route handlers for the notes HTTP API.

use crate::error::ApiError;
use crate::store::NoteStore;
use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Json;
use axum::routing::{MethodRouter, get};
use notes_types::*;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub store: NoteStore,
    pub start_time: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: NoteStore::new(),
            start_time: Instant::now(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    // Everything below /notes/ is a single-note path. The wildcard does not
    // match an empty tail, so /notes/ is registered separately.
    let note_by_id: MethodRouter<Arc<AppState>> = get(get_note)
        .put(update_note)
        .delete(delete_note)
        .fallback(method_not_allowed);

    Router::new()
        .route(
            "/notes",
            get(list_notes).post(create_note).fallback(method_not_allowed),
        )
        .route("/notes/", note_by_id.clone())
        .route("/notes/*rest", note_by_id)
        .route("/status", get(status))
        .with_state(state)
        .layer(cors)
}

/// The id is the whole path after `/notes/`, so `/notes/` and `/notes/1/x`
/// are rejected as invalid ids.
fn note_id(uri: &Uri) -> Result<i64, ApiError> {
    let raw = uri.path().strip_prefix("/notes/").unwrap_or_default();
    raw.parse().map_err(|_| {
        log::warn!("[NOTES] Rejected note id '{}'", raw);
        ApiError::InvalidInput("Invalid ID".to_string())
    })
}

fn invalid_body(reason: impl std::fmt::Display) -> ApiError {
    log::warn!("[NOTES] Rejected request body: {}", reason);
    ApiError::InvalidInput("Invalid input".to_string())
}

/// Decode the first JSON value of the body. Trailing data is ignored and a
/// `null` body decodes as an empty note.
fn parse_input(body: &[u8]) -> Result<NoteInput, ApiError> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<NoteInput>>()
        .next();

    match first {
        Some(Ok(input)) => Ok(input.unwrap_or_default()),
        Some(Err(e)) => Err(invalid_body(e)),
        None => Err(invalid_body("empty body")),
    }
}

// GET /notes[?title=...]
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Vec<Note>> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            log::warn!("[NOTES] Ignoring unreadable query: {}", e.body_text());
            Vec::new()
        }
    };
    let query = ListNotesQuery::from_pairs(pairs);
    Json(state.store.list(query.title.as_deref()))
}

// POST /notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let input = parse_input(&body)?;
    let note = state.store.create(input.title, input.content);
    log::info!("[NOTES] Created note {}", note.id);
    Ok((StatusCode::CREATED, Json(note)))
}

// GET /notes/{id}
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Json<Note>, ApiError> {
    let id = note_id(&uri)?;
    Ok(Json(state.store.find_by_id(id)?))
}

// PUT /notes/{id}
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> Result<Json<Note>, ApiError> {
    let id = note_id(&uri)?;
    let input = parse_input(&body)?;
    let note = state.store.update(id, input.title, input.content)?;
    log::info!("[NOTES] Updated note {}", note.id);
    Ok(Json(note))
}

// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<StatusCode, ApiError> {
    let id = note_id(&uri)?;
    log::debug!("[NOTES] Deleting note {} ({} stored)", id, state.store.len());
    state.store.delete(id)?;
    log::info!("[NOTES] Deleted note {}", id);
    Ok(StatusCode::NO_CONTENT)
}

// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_notes: state.store.len(),
    })
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
