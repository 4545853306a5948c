//! The host bridge contract the panel core relies on.
//!
//! The bridge itself (iframe messaging, handshake, origin checks) belongs to
//! the host SDK. This module only pins down the calls the panel makes and the
//! loose reply shape they come back with:
//!
//! - `Ok(Some(value))`: the host replied, usually `{status, message, data}`.
//! - `Ok(None)`: the call resolved without a value.
//! - `Err(BridgeError)`: the call threw or its promise rejected.

use std::sync::Arc;

use async_trait::async_trait;
use oaf_common::{BridgeError, Geometry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::EventEmitter;

/// Whatever the host resolved a call with; `None` for a void reply.
pub type RawResponse = Option<Value>;

/// Outcome of a single bridge call before normalization.
pub type BridgeResult = Result<RawResponse, BridgeError>;

/// Arguments for `moveAndResize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAndResize {
    #[serde(flatten)]
    pub geometry: Geometry,
    pub reset_to_dock: bool,
}

/// Arguments for `setSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSize {
    pub height: u32,
    pub width: u32,
}

/// Arguments for `moveToLocation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToLocation {
    pub top: u32,
    pub left: u32,
    pub reset_to_dock: bool,
}

/// Argument shape for `navigateToPath`.
///
/// Current hosts take the bare path. `Object` is the compatibility shape for
/// older builds that expect `{ path }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavigateRequest {
    Path(String),
    Object { path: String },
}

impl NavigateRequest {
    pub fn path(&self) -> &str {
        match self {
            NavigateRequest::Path(path) | NavigateRequest::Object { path } => path,
        }
    }
}

/// Operations the host bridge exposes to the panel.
///
/// `open_easy_form` and `launch_ui_button_click_process` live under the SDK's
/// `enterprise` namespace; they are flattened here.
#[async_trait]
pub trait HostBridge: Send + Sync {
    async fn get_page_context(&self) -> BridgeResult;

    async fn move_and_resize(&self, request: MoveAndResize) -> BridgeResult;

    async fn set_size(&self, _request: SetSize) -> BridgeResult {
        Err(BridgeError::Unsupported("setSize".into()))
    }

    async fn move_to_location(&self, _request: MoveToLocation) -> BridgeResult {
        Err(BridgeError::Unsupported("moveToLocation".into()))
    }

    async fn navigate_to_path(&self, request: NavigateRequest) -> BridgeResult;

    async fn read_form(&self, request: Value) -> BridgeResult;

    async fn write_form(&self, data: Value) -> BridgeResult;

    async fn listen_to_data_location(&self, data: Value) -> BridgeResult;

    async fn listen_to_oaf_events(&self, data: Value) -> BridgeResult;

    async fn get_element_meta(&self, structure: Value) -> BridgeResult;

    async fn open_easy_form(&self, form_id: &str) -> BridgeResult;

    async fn launch_ui_button_click_process(&self, process_id: u64) -> BridgeResult;

    /// The host's event emitter, if this bridge build exposes a usable one.
    fn events(&self) -> Option<Arc<EventEmitter>>;
}

/// Read `data.pageDetails.{viewPortHeight, viewPortWidth}` from a page
/// context reply. Missing or non-numeric fields come back as `None`.
pub fn page_details(context: &Value) -> (Option<f64>, Option<f64>) {
    let details = context.get("data").and_then(|d| d.get("pageDetails"));
    let field = |name: &str| details.and_then(|d| d.get(name)).and_then(Value::as_f64);
    (field("viewPortHeight"), field("viewPortWidth"))
}
