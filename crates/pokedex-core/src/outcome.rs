//! Result of a controller action.

use serde::Serialize;

/// What a controller action did to its state.
///
/// Failures are not errors at this level: the error is stored in the
/// controller's state and the action reports [`ActionOutcome::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The response was applied and the state now reflects it.
    Applied,
    /// The request failed; the state holds the error.
    Failed,
    /// The action was a no-op (a load already in flight, or nothing more
    /// to load). No request was made.
    Skipped,
    /// The state was reset without a request (empty search term).
    Cleared,
    /// A newer request superseded this one, so its response was dropped.
    Discarded,
}

impl ActionOutcome {
    /// Whether a network request was made for this action.
    pub const fn requested(self) -> bool {
        matches!(self, Self::Applied | Self::Failed | Self::Discarded)
    }
}
