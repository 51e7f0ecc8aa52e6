//! Wire shapes of the method channel.
//!
//! The application layer talks to the bridge with named method calls and
//! receives pushes as named method invocations. Launch events cross the
//! wire as a flat string-keyed map; this module is the only place that
//! knows those keys.

use launchbridge_common::{ChannelError, LaunchEvent};
use serde::{Deserialize, Serialize};

/// Pull request for the current launch event.
pub const GET_INITIAL_INTENT: &str = "getInitialIntent";

/// Push notification carrying a superseding launch event.
pub const ON_NEW_INTENT: &str = "onNewIntent";

/// A request from the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl MethodCall {
    /// A call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: serde_json::Value::Null,
        }
    }

    /// Parse a call from its JSON form. Malformed input yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Reply to a `MethodCall`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    /// `result` is `null` when there is no value to report.
    Success { result: serde_json::Value },
    /// The bridge does not handle this method.
    NotImplemented,
}

impl MethodResponse {
    pub fn success(result: serde_json::Value) -> Self {
        Self::Success { result }
    }

    pub fn no_value() -> Self {
        Self::Success {
            result: serde_json::Value::Null,
        }
    }
}

/// A notification pushed from the bridge to the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    pub channel: String,
    pub method: String,
    pub arguments: serde_json::Value,
}

#[derive(Serialize)]
struct WireLaunchEvent<'a> {
    action: &'a str,
    uri: &'a str,
    path: &'a str,
    #[serde(rename = "type")]
    mime_type: &'a str,
}

/// Encode a launch event as the `{action, uri, path, type}` map.
pub fn encode_launch_event(event: &LaunchEvent) -> Result<serde_json::Value, ChannelError> {
    let wire = WireLaunchEvent {
        action: event.action.as_str(),
        uri: &event.uri,
        path: &event.path,
        mime_type: &event.mime_type,
    };
    serde_json::to_value(wire).map_err(|e| ChannelError::Encode(e.to_string()))
}
