use super::*;
use crate::schema::BridgeConfig;

fn config_with_name(name: &str) -> BridgeConfig {
    let mut config = BridgeConfig::default();
    config.channel.name = name.to_string();
    config
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&BridgeConfig::default()).is_ok());
}

#[test]
fn accepts_reverse_domain_names() {
    assert!(validate(&config_with_name("com.example.player/intent")).is_ok());
    assert!(validate(&config_with_name("io.x/y")).is_ok());
}

#[test]
fn rejects_malformed_names() {
    for name in [
        "",
        "intent",
        "com/intent",
        "com.example/",
        "com..example/intent",
        ".com/intent",
        "com.example/a/b",
        "com.example/my intent",
    ] {
        assert!(
            validate(&config_with_name(name)).is_err(),
            "expected {name:?} to be rejected"
        );
    }
}

#[test]
fn rejects_capacity_out_of_range() {
    let mut config = BridgeConfig::default();
    config.channel.push_capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("channel.push_capacity = 0"));

    config.channel.push_capacity = 1025;
    assert!(validate(&config).is_err());

    config.channel.push_capacity = 1024;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_all_errors() {
    let mut config = config_with_name("nope");
    config.channel.push_capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("channel.name"));
    assert!(err.contains("channel.push_capacity"));
    assert!(err.contains("; "));
}
