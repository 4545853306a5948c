//! Executes CLI steps against the panel and collects a JSON report.

use oaf_bridge::{HostResult, Subscription};
use oaf_common::HostEventKind;
use oaf_layout::{LayoutSnapshot, OafPanel};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::Step;

#[derive(Debug, Serialize)]
pub struct StepOutcome {
    pub step: String,
    /// Layout steps report the snapshot they left behind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<LayoutSnapshot>,
    /// Host pass-through steps report the normalized host result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<HostResult>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub connected: bool,
    pub steps: Vec<StepOutcome>,
    pub snapshot: LayoutSnapshot,
}

/// Log host error and message events for as long as the subscription lives.
pub fn log_host_diagnostics(panel: &OafPanel) -> Subscription {
    panel
        .events()
        .subscribe(HostEventKind::diagnostic_events(), |event| {
            warn!(kind = %event.kind, payload = %event.payload, "host event");
        })
}

pub async fn run_step(panel: &OafPanel, step: &Step) -> StepOutcome {
    info!(%step, "running step");
    let result = match step {
        Step::DockLeft => {
            panel.dock_left().await;
            None
        }
        Step::DockRight => {
            panel.dock_right().await;
            None
        }
        Step::Maximize => {
            panel.maximize().await;
            None
        }
        Step::SidePanel => {
            panel.side_panel().await;
            None
        }
        Step::Minimize => {
            panel.minimize().await;
            None
        }
        Step::Expand => {
            panel.expand().await;
            None
        }
        Step::Close => {
            panel.close().await;
            None
        }
        Step::PageContext => Some(panel.get_page_context().await),
        Step::Navigate(path) => Some(panel.navigate_path(path).await),
    };

    StepOutcome {
        step: step.to_string(),
        snapshot: result
            .is_none()
            .then(|| LayoutSnapshot::clone(&panel.snapshot())),
        result,
    }
}

pub async fn run(panel: &OafPanel, steps: &[Step]) -> Report {
    let mut outcomes = Vec::with_capacity(steps.len());
    for step in steps {
        outcomes.push(run_step(panel, step).await);
    }
    Report {
        connected: panel.client().is_connected(),
        steps: outcomes,
        snapshot: LayoutSnapshot::clone(&panel.snapshot()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oaf_bridge::{fixed_window, OafClient, SimulatedHost};
    use oaf_common::{LayoutPosition, LayoutState, Viewport, WindowSize};
    use oaf_config::LayoutDimensions;
    use serde_json::json;
    use std::sync::Arc;

    fn connected_panel() -> OafPanel {
        connected_with_host().1
    }

    fn connected_with_host() -> (Arc<SimulatedHost>, OafPanel) {
        let host = Arc::new(SimulatedHost::new(Viewport::new(1080.0, 1920.0)));
        let client = OafClient::connected(
            Arc::clone(&host) as Arc<dyn oaf_bridge::HostBridge>,
            fixed_window(WindowSize::new(500.0, 400.0)),
        );
        (host, OafPanel::new(client, LayoutDimensions::default()))
    }

    #[tokio::test]
    async fn report_collects_each_step() {
        let panel = connected_panel();
        let report = run(
            &panel,
            &[
                Step::DockLeft,
                Step::Maximize,
                Step::Navigate("/invoices".into()),
            ],
        )
        .await;

        assert!(report.connected);
        assert_eq!(report.steps.len(), 3);
        assert!(report.steps[0].snapshot.is_some());
        assert!(report.steps[2].result.as_ref().is_some_and(HostResult::is_success));
        assert_eq!(report.snapshot.curr_layout_position, LayoutPosition::DockedLeft);
        assert_eq!(report.snapshot.curr_layout_state, LayoutState::Maximized);
    }

    #[tokio::test]
    async fn standalone_report_serializes() {
        let client = OafClient::standalone(fixed_window(WindowSize::new(500.0, 400.0)));
        let panel = OafPanel::new(client, LayoutDimensions::default());
        let report = run(&panel, &[Step::PageContext, Step::Minimize]).await;

        let wire = serde_json::to_value(&report).unwrap();
        assert_eq!(wire["connected"], false);
        assert_eq!(wire["steps"][0]["step"], "page-context");
        assert_eq!(wire["steps"][0]["result"]["status"], "success");
        assert_eq!(
            wire["steps"][1]["snapshot"]["error"],
            "Not connected to the host application"
        );
        assert!(wire["steps"][1].get("result").is_none());
    }

    #[test]
    fn diagnostics_follow_host_error_events() {
        let (host, panel) = connected_with_host();
        let diagnostics = log_host_diagnostics(&panel);

        assert_eq!(diagnostics.kinds().count(), 3);
        assert_eq!(host.emit(HostEventKind::OafError, json!({"message": "boom"})), 1);
        assert_eq!(host.emit(HostEventKind::Message, json!("hello")), 1);
        assert_eq!(host.emit(HostEventKind::SubscribedLocationExit, json!(null)), 0);

        drop(diagnostics);
        assert_eq!(host.emit(HostEventKind::OafError, json!(null)), 0);
    }
}
