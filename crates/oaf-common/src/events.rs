use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Named events the host bridge emits towards the panel.
///
/// Equality and hashing go through the wire name, so `Other("oafError")`
/// and `OafError` are the same kind.
#[derive(Debug, Clone)]
pub enum HostEventKind {
    Error,
    OafError,
    Message,
    SubscribedAttributeResponse,
    SubscribedLocationResponse,
    SubscribedLocationExit,
    GetElementMetaResponse,
    OafEventTrigger,
    /// An event name this build does not know about, kept verbatim.
    Other(String),
}

impl HostEventKind {
    pub fn as_str(&self) -> &str {
        match self {
            HostEventKind::Error => "error",
            HostEventKind::OafError => "oafError",
            HostEventKind::Message => "message",
            HostEventKind::SubscribedAttributeResponse => "subscribedAttributeResponse",
            HostEventKind::SubscribedLocationResponse => "subscribedLocationResponse",
            HostEventKind::SubscribedLocationExit => "subscribedLocationExit",
            HostEventKind::GetElementMetaResponse => "getElementMetaResponse",
            HostEventKind::OafEventTrigger => "oafEventTrigger",
            HostEventKind::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "error" => HostEventKind::Error,
            "oafError" => HostEventKind::OafError,
            "message" => HostEventKind::Message,
            "subscribedAttributeResponse" => HostEventKind::SubscribedAttributeResponse,
            "subscribedLocationResponse" => HostEventKind::SubscribedLocationResponse,
            "subscribedLocationExit" => HostEventKind::SubscribedLocationExit,
            "getElementMetaResponse" => HostEventKind::GetElementMetaResponse,
            "oafEventTrigger" => HostEventKind::OafEventTrigger,
            other => HostEventKind::Other(other.to_string()),
        }
    }

    /// Location-subscription events, usually observed together.
    pub fn location_events() -> [HostEventKind; 3] {
        [
            HostEventKind::SubscribedAttributeResponse,
            HostEventKind::SubscribedLocationResponse,
            HostEventKind::SubscribedLocationExit,
        ]
    }

    /// Events carrying host-side failures or free-form diagnostics.
    pub fn diagnostic_events() -> [HostEventKind; 3] {
        [
            HostEventKind::Error,
            HostEventKind::OafError,
            HostEventKind::Message,
        ]
    }
}

impl PartialEq for HostEventKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for HostEventKind {}

impl Hash for HostEventKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for HostEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HostEventKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HostEventKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(HostEventKind::from_name(&name))
    }
}

/// Push events the panel can ask the host to forward via `oafEventTrigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PushEventKind {
    PageResize,
    FormUpdated,
}

impl PushEventKind {
    /// Build the `listenToOafEvents` payload for the given push events.
    pub fn subscription_payload(kinds: &[PushEventKind]) -> Value {
        serde_json::to_value(kinds).unwrap_or(Value::Array(Vec::new()))
    }
}

/// A single event delivered by the host bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    pub kind: HostEventKind,
    #[serde(default)]
    pub payload: Value,
}

impl HostEvent {
    pub fn new(kind: HostEventKind, payload: Value) -> Self {
        Self { kind, payload }
    }
}
