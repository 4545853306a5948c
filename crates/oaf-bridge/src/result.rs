//! The normalized outcome of a host-bridge call.

use oaf_common::BridgeError;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Status string the host uses for a successful call.
pub const STATUS_SUCCESS: &str = "success";
/// Status string the host uses for a failed call.
pub const STATUS_FAILURE: &str = "failure";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HostStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "failure")]
    Error,
}

impl HostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostStatus::Success => STATUS_SUCCESS,
            HostStatus::Error => STATUS_FAILURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostSuccess {
    pub message: String,
    pub data: Option<Value>,
    pub raw_response: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostFailure {
    pub message: String,
    /// Structured error entries reported by the host, when it sent an array.
    pub error_data: Option<Vec<Value>>,
    /// The host's `action` field on a failed reply.
    pub error_action: Option<Value>,
    /// `None` when the call threw instead of replying.
    pub raw_response: Option<Value>,
    /// The bridge error when the call threw or rejected.
    pub error: Option<BridgeError>,
}

/// Result of any host-bridge call, produced only by the response normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum HostResult {
    Success(HostSuccess),
    Failure(HostFailure),
}

impl HostResult {
    pub fn status(&self) -> HostStatus {
        match self {
            HostResult::Success(_) => HostStatus::Success,
            HostResult::Failure(_) => HostStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HostResult::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            HostResult::Success(s) => &s.message,
            HostResult::Failure(f) => &f.message,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            HostResult::Success(s) => s.data.as_ref(),
            HostResult::Failure(_) => None,
        }
    }

    pub fn raw_response(&self) -> Option<&Value> {
        match self {
            HostResult::Success(s) => Some(&s.raw_response),
            HostResult::Failure(f) => f.raw_response.as_ref(),
        }
    }

    pub fn error_data(&self) -> Option<&[Value]> {
        match self {
            HostResult::Success(_) => None,
            HostResult::Failure(f) => f.error_data.as_deref(),
        }
    }

    pub fn error_action(&self) -> Option<&Value> {
        match self {
            HostResult::Success(_) => None,
            HostResult::Failure(f) => f.error_action.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&BridgeError> {
        match self {
            HostResult::Success(_) => None,
            HostResult::Failure(f) => f.error.as_ref(),
        }
    }
}

#[derive(Serialize)]
struct HostResultWire<'a> {
    status: HostStatus,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_data: Option<&'a [Value]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_action: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(rename = "rawResponse")]
    raw_response: Option<&'a Value>,
}

impl Serialize for HostResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HostResultWire {
            status: self.status(),
            message: self.message(),
            data: self.data(),
            error_data: self.error_data(),
            error_action: self.error_action(),
            error: self.error().map(ToString::to_string),
            raw_response: self.raw_response(),
        }
        .serialize(serializer)
    }
}
