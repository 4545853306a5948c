//! `OafPanel`: the layout actions and host pass-throughs exposed to the UI.

use std::sync::Arc;

use oaf_bridge::{execute, EventEmitter, HostResult, OafClient};
use oaf_common::{LayoutPosition, LayoutState, PushEventKind};
use oaf_config::LayoutDimensions;
use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use crate::geometry::{Calculator, LayoutKind};
use crate::orchestrator::resize_to;
use crate::store::{LayoutSnapshot, LayoutStore};

pub struct OafPanel {
    client: OafClient,
    store: Arc<LayoutStore>,
    calculator: Calculator,
}

impl OafPanel {
    pub fn new(client: OafClient, dimensions: LayoutDimensions) -> Self {
        Self::with_store(client, Arc::new(LayoutStore::new()), dimensions)
    }

    pub fn with_store(
        client: OafClient,
        store: Arc<LayoutStore>,
        dimensions: LayoutDimensions,
    ) -> Self {
        Self {
            client,
            store,
            calculator: Calculator::new(dimensions),
        }
    }

    pub fn client(&self) -> &OafClient {
        &self.client
    }

    pub fn store(&self) -> &Arc<LayoutStore> {
        &self.store
    }

    pub fn snapshot(&self) -> Arc<LayoutSnapshot> {
        self.store.snapshot()
    }

    pub fn watch(&self) -> watch::Receiver<Arc<LayoutSnapshot>> {
        self.store.subscribe()
    }

    pub fn events(&self) -> Arc<EventEmitter> {
        self.client.events()
    }

    async fn resize(
        &self,
        kind: LayoutKind,
        position: Option<LayoutPosition>,
        state: Option<LayoutState>,
    ) {
        resize_to(
            &self.client,
            self.store.as_ref(),
            &self.calculator,
            kind,
            position,
            state,
        )
        .await;
    }

    // -- Layout actions -------------------------------------------------------

    pub async fn dock_left(&self) {
        self.dock(LayoutKind::DockLeft, LayoutPosition::DockedLeft).await;
    }

    pub async fn dock_right(&self) {
        self.dock(LayoutKind::DockRight, LayoutPosition::DockedRight).await;
    }

    async fn dock(&self, kind: LayoutKind, position: LayoutPosition) {
        let current = self.snapshot();
        if current.curr_layout_position == position {
            debug!(%position, "already docked, skipping");
            return;
        }
        self.resize(kind, Some(position), Some(current.curr_layout_state))
            .await;
    }

    pub async fn maximize(&self) {
        self.enter(LayoutKind::Maximize, LayoutState::Maximized).await;
    }

    pub async fn side_panel(&self) {
        self.enter(LayoutKind::SidePanel, LayoutState::SidePanel).await;
    }

    async fn enter(&self, kind: LayoutKind, state: LayoutState) {
        let current = self.snapshot();
        if current.curr_layout_state == state {
            debug!(%state, "already in layout state, skipping");
            return;
        }
        self.resize(kind, Some(current.curr_layout_position), Some(state))
            .await;
    }

    /// Always re-applied, even when already minimized.
    pub async fn minimize(&self) {
        let current = self.snapshot();
        self.resize(
            LayoutKind::Minimize,
            Some(current.curr_layout_position),
            Some(LayoutState::Minimized),
        )
        .await;
    }

    /// Restore the previous layout state, or maximize when there is none.
    ///
    /// Only a previous side panel gets side-panel geometry; any other target
    /// state is laid out with the maximize geometry.
    pub async fn expand(&self) {
        let current = self.snapshot();
        let target = current.prev_layout_state.unwrap_or(LayoutState::Maximized);
        let kind = match target {
            LayoutState::SidePanel => LayoutKind::SidePanel,
            _ => LayoutKind::Maximize,
        };
        self.resize(kind, Some(current.curr_layout_position), Some(target))
            .await;
    }

    /// Collapse the panel to zero size. The layout state is left as is.
    pub async fn close(&self) {
        let current = self.snapshot();
        self.resize(
            LayoutKind::Close,
            Some(current.curr_layout_position),
            Some(current.curr_layout_state),
        )
        .await;
    }

    // -- Host pass-throughs ---------------------------------------------------

    pub async fn navigate_path(&self, path: &str) -> HostResult {
        execute(|| self.client.navigate_to_path(path)).await
    }

    pub async fn open_easy_form(&self, form_id: &str) -> HostResult {
        execute(|| self.client.open_easy_form(form_id)).await
    }

    pub async fn read_form(&self, meta: Value) -> HostResult {
        execute(|| self.client.read_form(meta)).await
    }

    pub async fn write_form(&self, data: Value) -> HostResult {
        execute(|| self.client.write_form(data)).await
    }

    pub async fn subscribe_to_location(&self, data: Value) -> HostResult {
        execute(|| self.client.subscribe_to_location(data)).await
    }

    pub async fn subscribe_to_events(&self, data: Value) -> HostResult {
        execute(|| self.client.subscribe_to_events(data)).await
    }

    /// Ask the host to forward the given push events via `oafEventTrigger`.
    pub async fn subscribe_to_push_events(&self, kinds: &[PushEventKind]) -> HostResult {
        self.subscribe_to_events(PushEventKind::subscription_payload(kinds))
            .await
    }

    pub async fn get_page_context(&self) -> HostResult {
        execute(|| self.client.get_page_context()).await
    }

    pub async fn get_element_meta(&self, structure: Value) -> HostResult {
        execute(|| self.client.get_element_meta(structure)).await
    }

    pub async fn launch_ui_button_click_process(&self, process_id: u64) -> HostResult {
        execute(|| self.client.launch_ui_button_click_process(process_id)).await
    }

    pub async fn set_size(&self, height: u32, width: u32) -> HostResult {
        execute(|| self.client.set_size(height, width)).await
    }

    pub async fn move_to_location(&self, top: u32, left: u32, reset_to_dock: bool) -> HostResult {
        execute(|| self.client.move_to_location(top, left, reset_to_dock)).await
    }
}
