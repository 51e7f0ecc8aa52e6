/// Default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r#"# Launch bridge configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[channel]
# name = "io.launchbridge/intent"   # reverse-domain endpoint name
# push_capacity = 16                # 1-1024
# delivery = "best_effort"          # best_effort, replay_last

[logging]
# level = "INFO"                    # DEBUG, INFO, WARNING, ERROR
"#
}
