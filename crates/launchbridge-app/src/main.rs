mod cli;
mod harness;

use std::io::{Read, Write};
use std::process::ExitCode;

use launchbridge_bridge::{channel::encode_launch_event, normalize};
use launchbridge_common::{BridgeError, HostEvent};
use launchbridge_config::BridgeConfig;
use serde_json::Value;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::harness::{parse_script, Harness};

fn load_config(args: &Args) -> Result<BridgeConfig, BridgeError> {
    let config = match &args.config {
        Some(path) => launchbridge_config::toml_loader::load_from_path(path)?,
        None => launchbridge_config::load_config()?,
    };
    Ok(config)
}

/// Validate once logging is up so problems are reported; anything
/// unusable falls back to defaults.
fn effective_config(loaded: Result<BridgeConfig, BridgeError>) -> BridgeConfig {
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            return BridgeConfig::default();
        }
    };
    match launchbridge_config::validation::validate(&config) {
        Ok(()) => config,
        Err(e) => {
            tracing::warn!("Config invalid, using defaults: {e}");
            BridgeConfig::default()
        }
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();
}

fn write_records(records: &[Value]) -> Result<(), BridgeError> {
    let mut out = std::io::stdout().lock();
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

fn run(args: &Args, config: BridgeConfig) -> Result<(), BridgeError> {
    match &args.command {
        Command::Normalize { event } => {
            let event: HostEvent = serde_json::from_str(event)
                .map_err(|e| BridgeError::Harness(format!("invalid host event: {e}")))?;
            let record = match normalize(&event) {
                Some(launch) => encode_launch_event(&launch)?,
                None => Value::Null,
            };
            write_records(&[record])
        }
        Command::Replay { script } => {
            let text = match script {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let steps = parse_script(&text)?;
            tracing::info!(steps = steps.len(), "replaying lifecycle script");
            let records = Harness::new(config).run(steps)?;
            write_records(&records)
        }
        Command::Config => {
            writeln!(
                std::io::stdout().lock(),
                "{}",
                launchbridge_config::config_to_json(&config)
            )?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the default log level, so it loads before logging.
    let loaded = load_config(&args);
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.as_filter())
        .unwrap_or("info");
    init_logging(args.log_level.as_deref().unwrap_or(level));

    let config = effective_config(loaded);
    tracing::debug!(channel = %config.channel.name, "config loaded");

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("launchbridge: {e}");
            ExitCode::FAILURE
        }
    }
}
