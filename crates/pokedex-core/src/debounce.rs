//! Debounced commit of typed search terms.
//!
//! Raw input goes into a pending register. Each new input cancels the
//! scheduled commit and schedules another one `window` later; when the
//! window elapses without further input, the pending term is committed.
//!
//! Committed terms are trimmed and lowercased, and a commit equal to the
//! last committed term is dropped. A reset forgets both the pending term
//! and the last commit.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, trace};

/// Default quiescence window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// Handle for feeding raw input into a running debouncer task.
///
/// Dropping every handle ends the task; a term still pending at that
/// point is not committed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    input: mpsc::UnboundedSender<Signal>,
}

#[derive(Debug)]
enum Signal {
    Input(String),
    Reset,
}

impl Debouncer {
    /// Spawn the debouncer task on the current runtime.
    ///
    /// `on_commit` runs on the task for each committed term, so it should
    /// hand longer work off (for example by spawning the search).
    pub fn spawn<F>(window: Duration, on_commit: F) -> (Self, JoinHandle<()>)
    where
        F: FnMut(String) + Send + 'static,
    {
        let (input, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(window, rx, on_commit));
        (Self { input }, handle)
    }

    /// Record raw input. Returns `false` if the task has stopped.
    pub fn input(&self, raw: impl Into<String>) -> bool {
        self.input.send(Signal::Input(raw.into())).is_ok()
    }

    /// Drop the pending term and forget the last commit, so the next
    /// term is committed even if it repeats an earlier one. Returns
    /// `false` if the task has stopped.
    pub fn reset(&self) -> bool {
        self.input.send(Signal::Reset).is_ok()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

async fn run<F>(window: Duration, mut rx: mpsc::UnboundedReceiver<Signal>, mut on_commit: F)
where
    F: FnMut(String),
{
    let mut pending: Option<String> = None;
    let mut last_committed: Option<String> = None;
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Some(Signal::Input(raw)) => {
                    trace!(raw = %raw, "search input");
                    pending = Some(normalize(&raw));
                    deadline = Instant::now().checked_add(window).unwrap_or_else(Instant::now);
                }
                Some(Signal::Reset) => {
                    debug!("debouncer reset");
                    pending = None;
                    last_committed = None;
                }
                None => break,
            },
            () = sleep_until(deadline), if pending.is_some() => {
                let Some(term) = pending.take() else { continue };
                if last_committed.as_deref() == Some(term.as_str()) {
                    debug!(term = %term, "unchanged term not recommitted");
                    continue;
                }
                debug!(term = %term, "search term committed");
                last_committed = Some(term.clone());
                on_commit(term);
            }
        }
    }
}
