//! Channel section: endpoint name shape and push capacity.

use crate::schema::{BridgeConfig, MAX_PUSH_CAPACITY, MIN_PUSH_CAPACITY};

use super::helpers::validate_range;

pub(crate) fn validate_channel(errors: &mut Vec<String>, config: &BridgeConfig) {
    if let Err(e) = check_channel_name(&config.channel.name) {
        errors.push(format!("channel.name = {:?}: {e}", config.channel.name));
    }
    validate_range(
        errors,
        "channel.push_capacity",
        config.channel.push_capacity,
        MIN_PUSH_CAPACITY,
        MAX_PUSH_CAPACITY,
    );
}

/// `<reverse.domain>/<endpoint>`, e.g. `com.example.player/intent`.
fn check_channel_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("must not be empty");
    }
    if name.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    let (domain, endpoint) = name
        .split_once('/')
        .ok_or("must be <reverse.domain>/<endpoint>")?;
    if endpoint.is_empty() || endpoint.contains('/') {
        return Err("endpoint must be a single non-empty segment");
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err("domain needs at least two non-empty labels");
    }
    Ok(())
}
