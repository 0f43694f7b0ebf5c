use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use notes_types::ErrorResponse;

/// Failures surfaced by the note store and the HTTP boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Note not found")]
    NotFound,
}

impl NoteError {
    pub fn title_required() -> Self {
        NoteError::InvalidArgument("Title is required".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            NoteError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            NoteError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log::debug!("Rejecting request with {}: {}", status, self);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
