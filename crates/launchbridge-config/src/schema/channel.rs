//! Message channel configuration.

use serde::{Deserialize, Serialize};

/// Endpoint identifier used when none is configured.
pub const DEFAULT_CHANNEL_NAME: &str = "io.launchbridge/intent";

/// Accepted range for `push_capacity`.
pub const MIN_PUSH_CAPACITY: u32 = 1;
pub const MAX_PUSH_CAPACITY: u32 = 1024;

/// What happens to a push sent while no listener is attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// The push is dropped.
    #[default]
    BestEffort,
    /// The most recent dropped push is handed to the next listener.
    ReplayLast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Reverse-domain endpoint name, e.g. `com.example.player/intent`.
    pub name: String,
    /// Pushes a slow listener may fall behind by (valid range: 1-1024).
    pub push_capacity: u32,
    pub delivery: DeliveryPolicy,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CHANNEL_NAME.to_string(),
            push_capacity: 16,
            delivery: DeliveryPolicy::BestEffort,
        }
    }
}
