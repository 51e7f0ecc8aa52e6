//! Launch bridge configuration.
//!
//! TOML-based configuration with defaults for every field, so a partial
//! file (or no file at all) works out of the box.
//!
//! ```rust,no_run
//! use launchbridge_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    BridgeConfig, ChannelConfig, DeliveryPolicy, LogLevel, LoggingConfig, CONFIG_SCHEMA_VERSION,
    DEFAULT_CHANNEL_NAME, MAX_PUSH_CAPACITY, MIN_PUSH_CAPACITY,
};

use launchbridge_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<BridgeConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BridgeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&BridgeConfig::default());
        assert!(json.contains("\"channel\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"io.launchbridge/intent\""));
        assert!(json.contains("\"best_effort\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&BridgeConfig::default());
        let parsed: BridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.channel.name, DEFAULT_CHANNEL_NAME);
        assert_eq!(parsed.channel.push_capacity, 16);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
