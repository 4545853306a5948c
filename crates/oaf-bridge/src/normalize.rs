//! Response normalizer: folds every reply shape the host can produce into a
//! single [`HostResult`].

use std::future::Future;

use oaf_common::BridgeError;
use serde_json::Value;
use tracing::{debug, warn};

use crate::host::{BridgeResult, RawResponse};
use crate::result::{HostFailure, HostResult, HostSuccess, STATUS_FAILURE, STATUS_SUCCESS};

pub const MSG_SUCCESS: &str = "Operation completed successfully";
pub const MSG_GENERIC_ERROR: &str = "An error occurred";
pub const MSG_UNKNOWN_ERROR: &str = "An unknown error occurred";
pub const MSG_NO_RESPONSE: &str = "No response received from the host";

/// Run a bridge call and normalize whatever it produced. Never fails.
pub async fn execute<F, Fut>(action: F) -> HostResult
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = BridgeResult>,
{
    let result = match action().await {
        Ok(raw) => normalize(raw),
        Err(error) => from_error(error),
    };
    debug!(
        status = result.status().as_str(),
        message = result.message(),
        "host call normalized"
    );
    result
}

/// Normalize a resolved reply.
pub fn normalize(raw: RawResponse) -> HostResult {
    let resp = match raw {
        Some(resp) if !resp.is_null() => resp,
        void => {
            return HostResult::Failure(HostFailure {
                message: MSG_NO_RESPONSE.into(),
                error_data: None,
                error_action: None,
                raw_response: void,
                error: None,
            });
        }
    };

    if !resp.is_object() {
        let kind = json_kind(&resp);
        warn!(kind, "host reply is not an object");
        return HostResult::Failure(HostFailure {
            message: MSG_UNKNOWN_ERROR.into(),
            error_data: None,
            error_action: None,
            raw_response: Some(resp),
            error: Some(BridgeError::Malformed(format!(
                "expected an object reply, got {kind}"
            ))),
        });
    }

    let status = resp.get("status").and_then(Value::as_str);

    if status == Some(STATUS_SUCCESS) {
        // The host's own message wins, even when it is empty.
        let message = match resp.get("message") {
            Some(Value::String(s)) => Some(s.clone()),
            other => other.and_then(text),
        };
        let data = resp.get("data").filter(|d| !d.is_null()).cloned();
        return HostResult::Success(HostSuccess {
            message: message.unwrap_or_else(|| MSG_SUCCESS.into()),
            data,
            raw_response: resp,
        });
    }

    if status != Some(STATUS_FAILURE) {
        warn!(status = ?status, "unrecognized host status, treating as failure");
    }

    let error_data = resp.get("error_data").and_then(Value::as_array).cloned();
    let message = match &error_data {
        Some(entries) => aggregate_errors(entries),
        None => resp
            .get("message")
            .and_then(text)
            .unwrap_or_else(|| MSG_UNKNOWN_ERROR.into()),
    };
    let error_action = resp.get("action").filter(|a| !a.is_null()).cloned();

    HostResult::Failure(HostFailure {
        message,
        error_data,
        error_action,
        raw_response: Some(resp),
        error: None,
    })
}

/// Normalize a call that threw or rejected.
pub fn from_error(error: BridgeError) -> HostResult {
    let message = error.to_string();
    HostResult::Failure(HostFailure {
        message: if message.is_empty() {
            MSG_GENERIC_ERROR.into()
        } else {
            message
        },
        error_data: None,
        error_action: None,
        raw_response: None,
        error: Some(error),
    })
}

/// `"{error_key} : {error_attribute}"` per entry, one per line.
fn aggregate_errors(entries: &[Value]) -> String {
    entries
        .iter()
        .map(|entry| {
            let key = entry
                .get("error_key")
                .and_then(text)
                .unwrap_or_else(|| STATUS_FAILURE.into());
            let detail = entry
                .get("error_attribute")
                .and_then(text)
                .or_else(|| entry.get("error_message").and_then(text))
                .unwrap_or_else(|| MSG_UNKNOWN_ERROR.into());
            format!("{key} : {detail}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Non-empty display text for a scalar JSON value.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
