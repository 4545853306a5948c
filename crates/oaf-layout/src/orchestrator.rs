//! Resize orchestration: page context, geometry, move-and-resize, state.
//!
//! [`resize_to`] never returns an outcome. Success and every kind of failure
//! land in the store as dispatched actions.

use oaf_bridge::normalize::{self, MSG_UNKNOWN_ERROR};
use oaf_bridge::result::STATUS_SUCCESS;
use oaf_bridge::{execute, page_details, OafClient};
use oaf_common::{Geometry, LayoutPosition, LayoutState, Viewport};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::geometry::{Calculator, LayoutKind};
use crate::store::{Dispatch, LayoutAction, LayoutResponse};

pub const MSG_PAGE_CONTEXT: &str = "Failed to get page context";

pub fn resize_message(geometry: &Geometry) -> String {
    format!(
        "Window resized successfully to {}x{}",
        geometry.height, geometry.width
    )
}

/// Move the panel into `kind`'s geometry and record the new layout.
///
/// `target_position` is also what the calculator sees as the previous dock
/// side. Position and state are only dispatched after the host confirms the
/// move.
pub async fn resize_to<D>(
    client: &OafClient,
    dispatch: &D,
    calculator: &Calculator,
    kind: LayoutKind,
    target_position: Option<LayoutPosition>,
    target_state: Option<LayoutState>,
) where
    D: Dispatch + ?Sized,
{
    debug!(
        layout = %kind,
        position = ?target_position,
        state = ?target_state,
        "resize requested"
    );

    match attempt(client, calculator, kind, target_position).await {
        Ok(geometry) => {
            info!(layout = %kind, %geometry, "panel resized");
            dispatch.dispatch(LayoutAction::SetResponse(LayoutResponse::new(
                resize_message(&geometry),
            )));
            if let Some(position) = target_position {
                dispatch.dispatch(LayoutAction::SetLayoutPosition(position));
            }
            if let Some(state) = target_state {
                dispatch.dispatch(LayoutAction::SetLayoutState(state));
            }
        }
        Err(message) => {
            warn!(layout = %kind, error = %message, "resize failed");
            dispatch.dispatch(LayoutAction::SetError(message));
        }
    }
}

async fn attempt(
    client: &OafClient,
    calculator: &Calculator,
    kind: LayoutKind,
    previous: Option<LayoutPosition>,
) -> Result<Geometry, String> {
    let context = match client.get_page_context().await {
        Ok(Some(context)) if is_success(&context) => context,
        Ok(_) => return Err(MSG_PAGE_CONTEXT.to_string()),
        Err(e) => return Err(normalize::from_error(e).message().to_string()),
    };

    let window = client.window_size();
    let (height, width) = page_details(&context);
    if height.is_none() || width.is_none() {
        debug!("page context lacks viewport size, using window size");
    }
    let viewport = Viewport::new(
        height.unwrap_or(window.height),
        width.unwrap_or(window.width),
    );

    let geometry = calculator.compute(kind, viewport, window, previous);
    debug!(layout = %kind, %geometry, "computed geometry");

    let result = execute(|| client.move_and_resize(geometry, false)).await;
    if result.is_success() {
        return Ok(geometry);
    }
    let message = result.message();
    Err(if message.is_empty() {
        MSG_UNKNOWN_ERROR.to_string()
    } else {
        message.to_string()
    })
}

fn is_success(context: &Value) -> bool {
    context.get("status").and_then(Value::as_str) == Some(STATUS_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LayoutSnapshot, LayoutStore};
    use oaf_bridge::{fixed_window, HostOp, Scripted, SimulatedHost};
    use oaf_common::{BridgeError, WindowSize};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn setup() -> (Arc<SimulatedHost>, OafClient, LayoutStore) {
        let host = Arc::new(SimulatedHost::new(Viewport::new(1080.0, 1920.0)));
        let client = OafClient::connected(
            host.clone(),
            fixed_window(WindowSize::new(500.0, 400.0)),
        );
        (host, client, LayoutStore::new())
    }

    #[tokio::test]
    async fn success_dispatches_response_position_state_in_order() {
        let (host, client, _) = setup();
        let actions = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&actions);
        let dispatch = move |action: LayoutAction| sink.lock().unwrap().push(action);

        resize_to(
            &client,
            &dispatch,
            &Calculator::default(),
            LayoutKind::DockLeft,
            Some(LayoutPosition::DockedLeft),
            Some(LayoutState::Default),
        )
        .await;

        assert_eq!(
            *actions.lock().unwrap(),
            vec![
                LayoutAction::SetResponse(LayoutResponse::new(
                    "Window resized successfully to 500x400"
                )),
                LayoutAction::SetLayoutPosition(LayoutPosition::DockedLeft),
                LayoutAction::SetLayoutState(LayoutState::Default),
            ]
        );
        assert_eq!(
            host.frame(),
            Some(Geometry {
                top: 580,
                left: 0,
                height: 500,
                width: 400,
            })
        );
        assert_eq!(host.calls_for(HostOp::MoveAndResize)[0]["resetToDock"], false);
    }

    #[tokio::test]
    async fn failed_page_context_stops_before_move() {
        let (host, client, store) = setup();
        host.script(
            HostOp::GetPageContext,
            Scripted::Reply(Some(json!({"status": "failure"}))),
        );

        resize_to(
            &client,
            &store,
            &Calculator::default(),
            LayoutKind::Maximize,
            Some(LayoutPosition::DockedRight),
            Some(LayoutState::Maximized),
        )
        .await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.error.as_deref(), Some(MSG_PAGE_CONTEXT));
        assert_eq!(snapshot.curr_layout_state, LayoutState::Default);
        assert_eq!(host.call_count(HostOp::MoveAndResize), 0);
    }

    #[tokio::test]
    async fn void_page_context_is_a_context_failure() {
        let (host, client, store) = setup();
        host.script(HostOp::GetPageContext, Scripted::Reply(None));

        resize_to(&client, &store, &Calculator::default(), LayoutKind::Close, None, None).await;
        assert_eq!(store.snapshot().error.as_deref(), Some(MSG_PAGE_CONTEXT));
    }

    #[tokio::test]
    async fn thrown_page_context_reports_error_message() {
        let (host, client, store) = setup();
        host.script(
            HostOp::GetPageContext,
            Scripted::Throw(BridgeError::Transport("bridge timed out".into())),
        );

        resize_to(&client, &store, &Calculator::default(), LayoutKind::Minimize, None, None)
            .await;
        assert_eq!(store.snapshot().error.as_deref(), Some("bridge timed out"));
    }

    #[tokio::test]
    async fn missing_viewport_falls_back_to_window() {
        let (host, client, store) = setup();
        host.script(
            HostOp::GetPageContext,
            Scripted::Reply(Some(json!({"status": "success", "data": {}}))),
        );

        resize_to(&client, &store, &Calculator::default(), LayoutKind::Minimize, None, None)
            .await;

        // 500x400 window stands in for the viewport.
        assert_eq!(
            host.frame(),
            Some(Geometry {
                top: 300,
                left: 200,
                height: 200,
                width: 200,
            })
        );
    }

    #[tokio::test]
    async fn move_failure_keeps_layout_and_reports_host_message() {
        let (host, client, store) = setup();
        host.script(
            HostOp::MoveAndResize,
            Scripted::Reply(Some(json!({
                "status": "failure",
                "error_data": [{"error_key": "frame", "error_attribute": "locked"}]
            }))),
        );

        resize_to(
            &client,
            &store,
            &Calculator::default(),
            LayoutKind::SidePanel,
            Some(LayoutPosition::DockedRight),
            Some(LayoutState::SidePanel),
        )
        .await;

        let snapshot = store.snapshot();
        assert!(snapshot.response.is_none());
        assert_eq!(
            *snapshot,
            LayoutSnapshot {
                error: Some("frame : locked".into()),
                ..LayoutSnapshot::default()
            }
        );
    }

    #[tokio::test]
    async fn standalone_move_reports_not_connected() {
        let client = OafClient::standalone(fixed_window(WindowSize::new(500.0, 400.0)));
        let store = LayoutStore::new();

        resize_to(&client, &store, &Calculator::default(), LayoutKind::DockLeft, None, None)
            .await;
        assert_eq!(
            store.snapshot().error,
            Some(BridgeError::NotConnected.to_string())
        );
    }
}
