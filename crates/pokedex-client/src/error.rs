//! Error types for the catalog client.
//!
//! Two families live here. [`ClientError`] covers failures building the
//! client itself. Everything that goes wrong on a request is normalized
//! into the shared [`ApiError`] by the `from_*` helpers, so no raw
//! `reqwest` or `serde_json` error ever leaves this crate.

use pokedex_types::ApiError;

/// Errors that can occur while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP client build error: {0}")]
    Build(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}

/// Normalize a transport-level failure (connect, timeout, body read).
pub(crate) fn from_transport(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::network("request timed out");
    }
    if let Some(status) = err.status() {
        return ApiError::status(status.as_u16(), format!("request failed: {err}"));
    }
    ApiError::network(format!("request failed: {err}"))
}

/// Normalize a non-2xx response.
///
/// Uses the `message` field of a JSON body when the server sent one,
/// otherwise a generic message naming the status code.
pub(crate) fn from_status(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| format!("Request failed with status code {status}"));
    ApiError::status(status, message)
}

/// Normalize a body that did not match the expected JSON shape.
pub(crate) fn from_decode(err: &serde_json::Error) -> ApiError {
    ApiError::decode(format!("response decode failed: {err}"))
}
