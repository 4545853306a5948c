//! Panel-side client over an optional host bridge.
//!
//! `OafClient` owns the bridge as an injected dependency. When no bridge is
//! available every host call fails with [`BridgeError::NotConnected`], except
//! the page context, which is synthesized from the panel's own window size so
//! layout math keeps working standalone.

use std::fmt;
use std::sync::Arc;

use oaf_common::{BridgeError, Geometry, WindowSize};
use oaf_config::NavigationStyle;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::events::EventEmitter;
use crate::host::{BridgeResult, HostBridge, MoveAndResize, MoveToLocation, NavigateRequest, SetSize};
use crate::result::STATUS_SUCCESS;

/// Supplies the panel's current window size.
pub trait WindowSizeSource: Send + Sync {
    fn window_size(&self) -> WindowSize;
}

impl<F> WindowSizeSource for F
where
    F: Fn() -> WindowSize + Send + Sync,
{
    fn window_size(&self) -> WindowSize {
        self()
    }
}

/// A source that always reports `size`.
pub fn fixed_window(size: WindowSize) -> Arc<dyn WindowSizeSource> {
    Arc::new(move || size)
}

pub struct OafClient {
    bridge: Option<Arc<dyn HostBridge>>,
    window: Arc<dyn WindowSizeSource>,
    navigation: NavigationStyle,
    /// Handed out when the bridge has no emitter of its own. Nothing emits on it.
    detached_events: Arc<EventEmitter>,
}

impl OafClient {
    pub fn connected(bridge: Arc<dyn HostBridge>, window: Arc<dyn WindowSizeSource>) -> Self {
        Self {
            bridge: Some(bridge),
            window,
            navigation: NavigationStyle::default(),
            detached_events: Arc::new(EventEmitter::new()),
        }
    }

    pub fn standalone(window: Arc<dyn WindowSizeSource>) -> Self {
        Self {
            bridge: None,
            window,
            navigation: NavigationStyle::default(),
            detached_events: Arc::new(EventEmitter::new()),
        }
    }

    /// Build a client from a bridge initializer, falling back to standalone
    /// mode when initialization fails.
    pub fn from_init<F>(init: F, window: Arc<dyn WindowSizeSource>) -> Self
    where
        F: FnOnce() -> Result<Arc<dyn HostBridge>, BridgeError>,
    {
        match init() {
            Ok(bridge) => Self::connected(bridge, window),
            Err(e) => {
                warn!(error = %e, "host bridge unavailable, running standalone");
                Self::standalone(window)
            }
        }
    }

    pub fn with_navigation(mut self, style: NavigationStyle) -> Self {
        self.navigation = style;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn window_size(&self) -> WindowSize {
        self.window.window_size()
    }

    /// The host's event emitter, or a detached one in standalone mode.
    pub fn events(&self) -> Arc<EventEmitter> {
        self.bridge
            .as_ref()
            .and_then(|bridge| bridge.events())
            .unwrap_or_else(|| Arc::clone(&self.detached_events))
    }

    fn bridge(&self, operation: &'static str) -> Result<&Arc<dyn HostBridge>, BridgeError> {
        debug!(operation, connected = self.bridge.is_some(), "host call");
        self.bridge.as_ref().ok_or(BridgeError::NotConnected)
    }

    pub async fn get_page_context(&self) -> BridgeResult {
        match &self.bridge {
            Some(bridge) => {
                debug!(operation = "getPageContext", connected = true, "host call");
                bridge.get_page_context().await
            }
            None => {
                let window = self.window_size();
                debug!(
                    height = window.height,
                    width = window.width,
                    "synthesizing page context from window size"
                );
                Ok(Some(json!({
                    "status": STATUS_SUCCESS,
                    "data": {
                        "pageDetails": {
                            "viewPortHeight": window.height,
                            "viewPortWidth": window.width,
                        }
                    }
                })))
            }
        }
    }

    pub async fn move_and_resize(&self, geometry: Geometry, reset_to_dock: bool) -> BridgeResult {
        self.bridge("moveAndResize")?
            .move_and_resize(MoveAndResize {
                geometry,
                reset_to_dock,
            })
            .await
    }

    pub async fn set_size(&self, height: u32, width: u32) -> BridgeResult {
        self.bridge("setSize")?
            .set_size(SetSize { height, width })
            .await
    }

    pub async fn move_to_location(&self, top: u32, left: u32, reset_to_dock: bool) -> BridgeResult {
        self.bridge("moveToLocation")?
            .move_to_location(MoveToLocation {
                top,
                left,
                reset_to_dock,
            })
            .await
    }

    pub async fn navigate_to_path(&self, path: &str) -> BridgeResult {
        let request = match self.navigation {
            NavigationStyle::Path => NavigateRequest::Path(path.to_string()),
            NavigationStyle::Object => NavigateRequest::Object {
                path: path.to_string(),
            },
        };
        self.bridge("navigateToPath")?.navigate_to_path(request).await
    }

    pub async fn open_easy_form(&self, form_id: &str) -> BridgeResult {
        self.bridge("openEasyForm")?.open_easy_form(form_id).await
    }

    /// The host expects the metadata wrapped as `{ formMetaData }`.
    pub async fn read_form(&self, meta: Value) -> BridgeResult {
        self.bridge("readForm")?
            .read_form(json!({ "formMetaData": meta }))
            .await
    }

    pub async fn write_form(&self, data: Value) -> BridgeResult {
        self.bridge("writeForm")?.write_form(data).await
    }

    pub async fn subscribe_to_location(&self, data: Value) -> BridgeResult {
        self.bridge("listenToDataLocation")?
            .listen_to_data_location(data)
            .await
    }

    pub async fn subscribe_to_events(&self, data: Value) -> BridgeResult {
        self.bridge("listenToOafEvents")?
            .listen_to_oaf_events(data)
            .await
    }

    pub async fn get_element_meta(&self, structure: Value) -> BridgeResult {
        self.bridge("getElementMeta")?.get_element_meta(structure).await
    }

    pub async fn launch_ui_button_click_process(&self, process_id: u64) -> BridgeResult {
        self.bridge("launchUiButtonClickProcess")?
            .launch_ui_button_click_process(process_id)
            .await
    }
}

impl fmt::Debug for OafClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OafClient")
            .field("connected", &self.is_connected())
            .field("navigation", &self.navigation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::page_details;
    use crate::simulated::{HostOp, SimulatedHost};
    use oaf_common::{HostEvent, HostEventKind, Viewport};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn window() -> Arc<dyn WindowSizeSource> {
        fixed_window(WindowSize::new(500.0, 400.0))
    }

    #[tokio::test]
    async fn standalone_page_context_uses_window_size() {
        let client = OafClient::standalone(window());
        let context = client.get_page_context().await.unwrap().unwrap();
        assert_eq!(context["status"], "success");
        assert_eq!(page_details(&context), (Some(500.0), Some(400.0)));
    }

    #[tokio::test]
    async fn standalone_calls_fail_not_connected() {
        let client = OafClient::standalone(window());
        assert!(!client.is_connected());
        assert_eq!(
            client.navigate_to_path("/home").await,
            Err(BridgeError::NotConnected)
        );
        assert_eq!(
            client.move_and_resize(Geometry::default(), false).await,
            Err(BridgeError::NotConnected)
        );
        assert_eq!(
            client.launch_ui_button_click_process(7).await,
            Err(BridgeError::NotConnected)
        );
    }

    #[test]
    fn failed_init_falls_back_to_standalone() {
        let client = OafClient::from_init(
            || Err(BridgeError::Transport("no parent frame".into())),
            window(),
        );
        assert!(!client.is_connected());
    }

    #[tokio::test]
    async fn read_form_wraps_metadata() {
        let host = Arc::new(SimulatedHost::new(Viewport::new(1080.0, 1920.0)));
        let client = OafClient::connected(host.clone(), window());
        client
            .read_form(json!({"formId": "requisition"}))
            .await
            .unwrap();

        let calls = host.calls_for(HostOp::ReadForm);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], json!({"formMetaData": {"formId": "requisition"}}));
    }

    #[tokio::test]
    async fn navigation_style_selects_request_shape() {
        let host = Arc::new(SimulatedHost::new(Viewport::new(1080.0, 1920.0)));
        let client =
            OafClient::connected(host.clone(), window()).with_navigation(NavigationStyle::Object);
        client.navigate_to_path("/invoices").await.unwrap();

        let calls = host.calls_for(HostOp::NavigateToPath);
        assert_eq!(calls, vec![json!({"path": "/invoices"})]);
    }

    #[test]
    fn window_size_from_closure() {
        let client = OafClient::standalone(Arc::new(|| WindowSize::new(720.0, 360.0)));
        assert_eq!(client.window_size(), WindowSize::new(720.0, 360.0));
    }

    #[test]
    fn standalone_events_are_detached_but_usable() {
        let client = OafClient::standalone(window());
        let events = client.events();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let _sub = events.subscribe([HostEventKind::Message], move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        // Same emitter on every call.
        assert!(Arc::ptr_eq(&events, &client.events()));
        events.emit(&HostEvent::new(HostEventKind::Message, Value::Null));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn connected_events_come_from_host() {
        let host = Arc::new(SimulatedHost::new(Viewport::new(1080.0, 1920.0)));
        let client = OafClient::connected(host.clone(), window());
        assert!(Arc::ptr_eq(&client.events(), &host.event_emitter()));
    }
}
