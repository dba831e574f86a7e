//! Error types for the web layer.
//!
//! [`WebError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Failed catalog requests are not web errors: they are part of the
//! controller state and are rendered as such.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the web layer.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The request body or parameters were not acceptable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// A background task the request depends on has stopped.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
