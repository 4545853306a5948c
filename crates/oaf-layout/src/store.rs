//! Layout state store.
//!
//! One [`LayoutSnapshot`] per session, replaced only by [`reduce`]ing a
//! [`LayoutAction`]. Changed snapshots are published over a
//! `tokio::sync::watch` channel; a no-op action publishes nothing and leaves
//! the stored `Arc` pointer-identical.

use std::sync::Arc;

use oaf_common::{LayoutPosition, LayoutState};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// Success payload of the last layout operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub message: String,
}

impl LayoutResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Current layout of the panel plus the outcome of the last operation.
///
/// `response` and `error` are never both set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub curr_layout_position: LayoutPosition,
    pub curr_layout_state: LayoutState,
    /// `curr_layout_state` as it was before the last `SetLayoutState`.
    pub prev_layout_state: Option<LayoutState>,
    pub response: Option<LayoutResponse>,
    pub error: Option<String>,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self {
            curr_layout_position: LayoutPosition::DockedRight,
            curr_layout_state: LayoutState::Default,
            prev_layout_state: None,
            response: None,
            error: None,
        }
    }
}

/// Actions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAction {
    SetResponse(LayoutResponse),
    SetError(String),
    SetLayoutPosition(LayoutPosition),
    SetLayoutState(LayoutState),
    /// Any action type this store does not handle.
    #[serde(other)]
    Unknown,
}

impl LayoutAction {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutAction::SetResponse(_) => "SET_RESPONSE",
            LayoutAction::SetError(_) => "SET_ERROR",
            LayoutAction::SetLayoutPosition(_) => "SET_LAYOUT_POSITION",
            LayoutAction::SetLayoutState(_) => "SET_LAYOUT_STATE",
            LayoutAction::Unknown => "UNKNOWN",
        }
    }
}

/// Apply `action` to `state`.
///
/// Returns the same `Arc` for [`LayoutAction::Unknown`], so callers can detect
/// a no-op with `Arc::ptr_eq`.
pub fn reduce(state: &Arc<LayoutSnapshot>, action: &LayoutAction) -> Arc<LayoutSnapshot> {
    let mut next = LayoutSnapshot::clone(state);
    match action {
        LayoutAction::SetResponse(response) => {
            next.response = Some(response.clone());
            next.error = None;
        }
        LayoutAction::SetError(message) => {
            next.error = Some(message.clone());
            next.response = None;
        }
        LayoutAction::SetLayoutPosition(position) => {
            next.curr_layout_position = *position;
        }
        LayoutAction::SetLayoutState(layout_state) => {
            next.prev_layout_state = Some(next.curr_layout_state);
            next.curr_layout_state = *layout_state;
        }
        LayoutAction::Unknown => return Arc::clone(state),
    }
    Arc::new(next)
}

/// Anything layout actions can be dispatched into.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: LayoutAction);
}

impl<F> Dispatch for F
where
    F: Fn(LayoutAction) + Send + Sync,
{
    fn dispatch(&self, action: LayoutAction) {
        self(action)
    }
}

/// Owner of the session's layout snapshot.
#[derive(Debug)]
pub struct LayoutStore {
    tx: watch::Sender<Arc<LayoutSnapshot>>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::with_snapshot(LayoutSnapshot::default())
    }

    pub fn with_snapshot(snapshot: LayoutSnapshot) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(snapshot));
        Self { tx }
    }

    /// Reduce `action` into the store. Returns `true` if the snapshot changed.
    pub fn apply(&self, action: LayoutAction) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            let next = reduce(current, &action);
            if Arc::ptr_eq(&next, current) {
                return false;
            }
            *current = next;
            true
        });
        debug!(action = action.name(), changed, "layout dispatch");
        changed
    }

    pub fn snapshot(&self) -> Arc<LayoutSnapshot> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver notified on every changed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<LayoutSnapshot>> {
        self.tx.subscribe()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for LayoutStore {
    fn dispatch(&self, action: LayoutAction) {
        self.apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn initial_snapshot() {
        let store = LayoutStore::new();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.curr_layout_position, LayoutPosition::DockedRight);
        assert_eq!(snapshot.curr_layout_state, LayoutState::Default);
        assert!(snapshot.prev_layout_state.is_none());
        assert!(snapshot.response.is_none());
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn response_and_error_clear_each_other() {
        let state = Arc::new(LayoutSnapshot::default());
        let with_error = reduce(&state, &LayoutAction::SetError("boom".into()));
        assert_eq!(with_error.error.as_deref(), Some("boom"));

        let with_response = reduce(&with_error, &LayoutAction::SetResponse(LayoutResponse::new("ok")));
        assert_eq!(with_response.response, Some(LayoutResponse::new("ok")));
        assert!(with_response.error.is_none());

        let back = reduce(&with_response, &LayoutAction::SetError("again".into()));
        assert!(back.response.is_none());
    }

    #[test]
    fn set_layout_state_tracks_previous() {
        let state = Arc::new(LayoutSnapshot::default());
        let x = reduce(&state, &LayoutAction::SetLayoutState(LayoutState::Maximized));
        let y = reduce(&x, &LayoutAction::SetLayoutState(LayoutState::Minimized));
        assert_eq!(y.prev_layout_state, Some(LayoutState::Maximized));
        assert_eq!(y.curr_layout_state, LayoutState::Minimized);
    }

    #[test]
    fn set_layout_position_leaves_state_alone() {
        let state = Arc::new(LayoutSnapshot::default());
        let next = reduce(&state, &LayoutAction::SetLayoutPosition(LayoutPosition::DockedLeft));
        assert_eq!(next.curr_layout_position, LayoutPosition::DockedLeft);
        assert!(next.prev_layout_state.is_none());
    }

    #[test]
    fn unknown_action_returns_same_arc() {
        let state = Arc::new(LayoutSnapshot::default());
        let next = reduce(&state, &LayoutAction::Unknown);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn unknown_action_does_not_notify() {
        let store = LayoutStore::new();
        let mut rx = store.subscribe();
        let before = store.snapshot();

        assert!(!store.apply(LayoutAction::Unknown));
        assert!(!rx.has_changed().unwrap());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));

        assert!(store.apply(LayoutAction::SetError("x".into())));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().error.as_deref(), Some("x"));
    }

    #[test]
    fn actions_use_reducer_wire_names() {
        let action = LayoutAction::SetLayoutPosition(LayoutPosition::DockedLeft);
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "SET_LAYOUT_POSITION", "payload": "docked-left"})
        );

        let parsed: LayoutAction =
            serde_json::from_value(json!({"type": "SET_LAYOUT_STATE", "payload": "side-panel"}))
                .unwrap();
        assert_eq!(parsed, LayoutAction::SetLayoutState(LayoutState::SidePanel));

        let unknown: LayoutAction = serde_json::from_value(json!({"type": "RESET"})).unwrap();
        assert_eq!(unknown, LayoutAction::Unknown);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let wire = serde_json::to_value(LayoutSnapshot::default()).unwrap();
        assert_eq!(
            wire,
            json!({
                "currLayoutPosition": "docked-right",
                "currLayoutState": "default",
                "prevLayoutState": null,
                "response": null,
                "error": null
            })
        );
    }

    #[test]
    fn closures_dispatch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let dispatch = move |action: LayoutAction| sink.lock().unwrap().push(action);
        dispatch.dispatch(LayoutAction::SetError("e".into()));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
