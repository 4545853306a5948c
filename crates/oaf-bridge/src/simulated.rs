//! In-process host bridge.
//!
//! Stands in for the real host when none is embedded: the CLI drives it and
//! tests use it to inspect what the panel sent. Every call is recorded, the
//! panel frame is tracked, and replies can be scripted per operation.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use oaf_common::{BridgeError, Geometry, HostEvent, HostEventKind, Viewport};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::events::EventEmitter;
use crate::host::{
    BridgeResult, HostBridge, MoveAndResize, MoveToLocation, NavigateRequest, RawResponse, SetSize,
};
use crate::result::STATUS_SUCCESS;

/// Host operations, named as the host SDK names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOp {
    GetPageContext,
    MoveAndResize,
    SetSize,
    MoveToLocation,
    NavigateToPath,
    ReadForm,
    WriteForm,
    ListenToDataLocation,
    ListenToOafEvents,
    GetElementMeta,
    OpenEasyForm,
    LaunchUiButtonClickProcess,
}

impl HostOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOp::GetPageContext => "getPageContext",
            HostOp::MoveAndResize => "moveAndResize",
            HostOp::SetSize => "setSize",
            HostOp::MoveToLocation => "moveToLocation",
            HostOp::NavigateToPath => "navigateToPath",
            HostOp::ReadForm => "readForm",
            HostOp::WriteForm => "writeForm",
            HostOp::ListenToDataLocation => "listenToDataLocation",
            HostOp::ListenToOafEvents => "listenToOafEvents",
            HostOp::GetElementMeta => "getElementMeta",
            HostOp::OpenEasyForm => "openEasyForm",
            HostOp::LaunchUiButtonClickProcess => "launchUiButtonClickProcess",
        }
    }
}

/// A canned outcome for the next call of one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Scripted {
    /// Resolve with this value (`None` for a void reply).
    Reply(RawResponse),
    /// Reject with this error.
    Throw(BridgeError),
}

impl Scripted {
    fn into_result(self) -> BridgeResult {
        match self {
            Scripted::Reply(raw) => Ok(raw),
            Scripted::Throw(error) => Err(error),
        }
    }
}

/// One call the panel made, with the arguments as the host would see them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub op: HostOp,
    pub payload: Value,
}

#[derive(Debug)]
struct HostState {
    viewport: Viewport,
    frame: Option<Geometry>,
    calls: Vec<RecordedCall>,
    scripts: HashMap<HostOp, VecDeque<Scripted>>,
}

#[derive(Debug)]
pub struct SimulatedHost {
    state: Mutex<HostState>,
    events: Arc<EventEmitter>,
}

impl SimulatedHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Mutex::new(HostState {
                viewport,
                frame: None,
                calls: Vec::new(),
                scripts: HashMap::new(),
            }),
            events: Arc::new(EventEmitter::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn viewport(&self) -> Viewport {
        self.state().viewport
    }

    /// Change the page viewport reported by later page-context calls.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.state().viewport = viewport;
    }

    /// The panel frame after the last successful move/resize, if any.
    pub fn frame(&self) -> Option<Geometry> {
        self.state().frame
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Payloads of every recorded call to `op`, oldest first.
    pub fn calls_for(&self, op: HostOp) -> Vec<Value> {
        self.state()
            .calls
            .iter()
            .filter(|call| call.op == op)
            .map(|call| call.payload.clone())
            .collect()
    }

    pub fn call_count(&self, op: HostOp) -> usize {
        self.state().calls.iter().filter(|call| call.op == op).count()
    }

    /// Queue an outcome for the next unscripted call of `op`. Scripted calls
    /// are still recorded but leave the frame untouched.
    pub fn script(&self, op: HostOp, outcome: Scripted) {
        self.state().scripts.entry(op).or_default().push_back(outcome);
    }

    pub fn event_emitter(&self) -> Arc<EventEmitter> {
        Arc::clone(&self.events)
    }

    /// Push an event to the panel as the host would.
    pub fn emit(&self, kind: HostEventKind, payload: Value) -> usize {
        self.events.emit(&HostEvent::new(kind, payload))
    }

    /// Record the call and return a scripted outcome if one is queued.
    fn record(&self, op: HostOp, payload: Value) -> Option<BridgeResult> {
        let mut state = self.state();
        debug!(operation = op.as_str(), "simulated host call");
        state.calls.push(RecordedCall { op, payload });
        state
            .scripts
            .get_mut(&op)
            .and_then(VecDeque::pop_front)
            .map(Scripted::into_result)
    }
}

fn payload<T: Serialize>(request: &T) -> Value {
    serde_json::to_value(request).unwrap_or_default()
}

fn success(message: impl Into<String>, data: Option<Value>) -> RawResponse {
    let mut reply = json!({
        "status": STATUS_SUCCESS,
        "message": message.into(),
    });
    if let Some(data) = data {
        reply["data"] = data;
    }
    Some(reply)
}

#[async_trait]
impl HostBridge for SimulatedHost {
    async fn get_page_context(&self) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::GetPageContext, Value::Null) {
            return scripted;
        }
        let viewport = self.viewport();
        Ok(success(
            "Page context retrieved",
            Some(json!({
                "pageDetails": {
                    "viewPortHeight": viewport.height,
                    "viewPortWidth": viewport.width,
                }
            })),
        ))
    }

    async fn move_and_resize(&self, request: MoveAndResize) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::MoveAndResize, payload(&request)) {
            return scripted;
        }
        self.state().frame = Some(request.geometry);
        Ok(success(
            format!("Panel moved to {}", request.geometry),
            Some(payload(&request.geometry)),
        ))
    }

    async fn set_size(&self, request: SetSize) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::SetSize, payload(&request)) {
            return scripted;
        }
        let mut state = self.state();
        let frame = state.frame.get_or_insert_with(Geometry::default);
        frame.height = request.height;
        frame.width = request.width;
        Ok(success("Panel resized", Some(payload(&*frame))))
    }

    async fn move_to_location(&self, request: MoveToLocation) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::MoveToLocation, payload(&request)) {
            return scripted;
        }
        let mut state = self.state();
        let frame = state.frame.get_or_insert_with(Geometry::default);
        frame.top = request.top;
        frame.left = request.left;
        Ok(success("Panel moved", Some(payload(&*frame))))
    }

    async fn navigate_to_path(&self, request: NavigateRequest) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::NavigateToPath, payload(&request)) {
            return scripted;
        }
        Ok(success(format!("Navigated to {}", request.path()), None))
    }

    async fn read_form(&self, request: Value) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::ReadForm, request) {
            return scripted;
        }
        Ok(success("Form read", Some(json!({ "values": {} }))))
    }

    async fn write_form(&self, data: Value) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::WriteForm, data) {
            return scripted;
        }
        Ok(success("Form updated", None))
    }

    async fn listen_to_data_location(&self, data: Value) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::ListenToDataLocation, data.clone()) {
            return scripted;
        }
        self.emit(HostEventKind::SubscribedLocationResponse, data);
        Ok(success("Subscribed to data location", None))
    }

    async fn listen_to_oaf_events(&self, data: Value) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::ListenToOafEvents, data) {
            return scripted;
        }
        Ok(success("Subscribed to events", None))
    }

    async fn get_element_meta(&self, structure: Value) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::GetElementMeta, structure.clone()) {
            return scripted;
        }
        self.emit(HostEventKind::GetElementMetaResponse, structure);
        Ok(success("Element metadata requested", None))
    }

    async fn open_easy_form(&self, form_id: &str) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::OpenEasyForm, json!(form_id)) {
            return scripted;
        }
        Ok(success(format!("Opened form {form_id}"), None))
    }

    async fn launch_ui_button_click_process(&self, process_id: u64) -> BridgeResult {
        if let Some(scripted) = self.record(HostOp::LaunchUiButtonClickProcess, json!(process_id))
        {
            return scripted;
        }
        Ok(success(format!("Launched process {process_id}"), None))
    }

    fn events(&self) -> Option<Arc<EventEmitter>> {
        Some(self.event_emitter())
    }
}
