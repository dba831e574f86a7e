//! `WebSocket` handler for real-time state streaming.
//!
//! Clients connect to `GET /ws/state` and receive one JSON-encoded
//! [`ViewEvent`] each time a controller or the view mode changes. The
//! handler watches the controllers' channels directly, so a slow client
//! only ever sees the latest state of each, never a backlog.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use pokedex_client::CatalogSource;
use serde::Serialize;
use tracing::{debug, warn};

use crate::state::AppState;
use crate::view::{ListView, SearchView, SelectionView, ViewMode};

/// A state change pushed to `WebSocket` clients.
#[derive(Debug, Clone, Serialize)]
pub struct ViewEvent {
    /// When the change was observed.
    pub at: DateTime<Utc>,
    /// What changed, with its new state.
    #[serde(flatten)]
    pub change: ViewChange,
}

/// The changed piece of state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum ViewChange {
    /// The paginated list changed.
    List(ListView),
    /// The search changed.
    Search(SearchView),
    /// The selection changed.
    Selection(SelectionView),
    /// The active view mode changed.
    Mode(ViewMode),
}

impl ViewEvent {
    /// Stamp a change with the current time.
    pub fn now(change: ViewChange) -> Self {
        Self {
            at: Utc::now(),
            change,
        }
    }
}

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming state changes.
///
/// # Route
///
/// `GET /ws/state`
pub async fn ws_state<S: CatalogSource + 'static>(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Handle the `WebSocket` lifecycle: watch every state channel and
/// forward each change as a text frame.
async fn handle_ws<S: CatalogSource>(mut socket: WebSocket, state: Arc<AppState<S>>) {
    debug!("WebSocket client connected");

    let mut list = state.list.subscribe();
    let mut search = state.search.subscribe();
    let mut detail = state.detail.subscribe();
    let mut mode = state.subscribe_mode();

    loop {
        let change = tokio::select! {
            result = list.changed() => {
                if result.is_err() {
                    return;
                }
                ViewChange::List(ListView::from(&*list.borrow_and_update()))
            }
            result = search.changed() => {
                if result.is_err() {
                    return;
                }
                ViewChange::Search(SearchView::from(&*search.borrow_and_update()))
            }
            result = detail.changed() => {
                if result.is_err() {
                    return;
                }
                ViewChange::Selection(SelectionView::from(&*detail.borrow_and_update()))
            }
            result = mode.changed() => {
                if result.is_err() {
                    return;
                }
                ViewChange::Mode(*mode.borrow_and_update())
            }
            // Check if the client sent a close frame or disconnected.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("WebSocket client disconnected");
                        return;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            debug!("WebSocket client disconnected (pong failed)");
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        debug!("WebSocket error: {e}");
                        return;
                    }
                    _ => {}
                }
                continue;
            }
        };

        let json = match serde_json::to_string(&ViewEvent::now(change)) {
            Ok(j) => j,
            Err(e) => {
                warn!("Failed to serialize view event: {e}");
                continue;
            }
        };
        if socket.send(Message::Text(json.into())).await.is_err() {
            debug!("WebSocket client disconnected (send failed)");
            return;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn event_is_tagged_by_kind() {
        let json = serde_json::to_value(ViewEvent::now(ViewChange::Mode(ViewMode::Search))).unwrap();
        assert_eq!(json["kind"], "mode");
        assert_eq!(json["state"], "search");
        assert!(json["at"].is_string());
    }
}
