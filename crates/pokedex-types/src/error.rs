//! The uniform error value surfaced by the remote data client.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ApiErrorKind;

/// A normalized remote API failure.
///
/// Built exactly once at the client boundary and never mutated after.
/// Controllers store it verbatim and the view shows only `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[error("{message}")]
#[ts(export, export_to = "bindings/")]
pub struct ApiError {
    /// Human-readable description.
    pub message: String,
    /// HTTP status code, when the server answered at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Failure category.
    pub kind: ApiErrorKind,
}

impl ApiError {
    /// A transport-level failure with no HTTP status.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            kind: ApiErrorKind::Network,
        }
    }

    /// A failure that carries an HTTP status.
    ///
    /// 404 is classified as [`ApiErrorKind::NotFound`], every other
    /// status as [`ApiErrorKind::Network`].
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let kind = if status == 404 {
            ApiErrorKind::NotFound
        } else {
            ApiErrorKind::Network
        };
        Self {
            message: message.into(),
            status: Some(status),
            kind,
        }
    }

    /// A missing record reported without an HTTP round trip.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            kind: ApiErrorKind::NotFound,
        }
    }

    /// A response body that could not be decoded.
    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            kind: ApiErrorKind::Decode,
        }
    }

    /// Whether the remote API reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_is_not_found() {
        let err = ApiError::status(404, "Not Found");
        assert!(err.is_not_found());
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn other_statuses_are_network() {
        let err = ApiError::status(503, "unavailable");
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_is_the_message() {
        assert_eq!(ApiError::decode("bad body").to_string(), "bad body");
    }

    #[test]
    fn missing_status_is_omitted_from_json() {
        let json = serde_json::to_value(ApiError::network("offline")).ok();
        let json = json.unwrap_or_default();
        assert!(json.get("status").is_none());
        assert_eq!(json["kind"], "network");
    }
}
