//! Enumeration types shared by the client, controllers, and web layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Loading state
// ---------------------------------------------------------------------------

/// Lifecycle of the most recent request issued by a controller.
///
/// Exactly one value is held per controller. Transitions happen when a
/// request starts or resolves, and on an explicit reset of the search
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum LoadingState {
    /// Nothing has been requested yet, or the search was cleared.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Success,
    /// The last request failed; the controller holds the error.
    Error,
}

impl LoadingState {
    /// Whether a request is currently in flight.
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Category of a normalized remote API failure.
///
/// Consumers render only the message of an [`ApiError`](crate::ApiError);
/// the kind exists for logging and for callers that need to tell a
/// missing record apart from a broken connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ApiErrorKind {
    /// Transport failure, timeout, or a non-2xx status other than 404.
    Network,
    /// The API answered 404 for the requested id or name.
    NotFound,
    /// The response body did not match the expected JSON shape.
    Decode,
}
