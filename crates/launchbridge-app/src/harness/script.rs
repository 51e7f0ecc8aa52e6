//! Lifecycle script format: one JSON object per line, tagged by `step`.
//!
//! Blank lines and lines starting with `#` are ignored.

use launchbridge_common::{BridgeError, HostEvent};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Host component created, with its launching event if any.
    Create {
        #[serde(default)]
        event: Option<HostEvent>,
    },
    /// Embedded runtime ready; channel transport attached.
    Configure,
    /// Application layer attaches its push listener.
    Listen,
    /// Application layer calls a bridge method.
    Call {
        method: String,
        #[serde(default)]
        arguments: serde_json::Value,
    },
    /// Host delivers a new launch event to the running component.
    NewIntent { event: HostEvent },
    /// Host component destroyed.
    Destroy,
}

pub fn parse_script(text: &str) -> Result<Vec<Step>, BridgeError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line.trim())
                .map_err(|e| BridgeError::Harness(format!("line {}: {e}", idx + 1)))
        })
        .collect()
}
