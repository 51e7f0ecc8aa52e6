//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod channel;
mod system;

pub use channel::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the launch bridge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub channel: ChannelConfig,
    pub logging: LoggingConfig,
}
