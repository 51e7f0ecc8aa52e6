//! Scripted host: replays lifecycle steps against an `IntentBridge`.
//!
//! Every step produces one or more JSON records describing what crossed
//! the channel, in order.

mod script;

pub use script::{parse_script, Step};

use launchbridge_bridge::{IntentBridge, MethodCall, PushListener, PushOutcome};
use launchbridge_common::{BridgeError, ChannelError};
use launchbridge_config::BridgeConfig;
use serde_json::{json, Value};
use tracing::debug;

pub struct Harness {
    config: BridgeConfig,
    bridge: Option<IntentBridge>,
    listener: Option<PushListener>,
}

impl Harness {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            bridge: None,
            listener: None,
        }
    }

    pub fn run(&mut self, steps: Vec<Step>) -> Result<Vec<Value>, BridgeError> {
        let mut records = Vec::new();
        for (idx, step) in steps.into_iter().enumerate() {
            debug!(step = idx + 1, ?step, "running step");
            records.extend(self.run_step(step)?);
        }
        Ok(records)
    }

    pub fn run_step(&mut self, step: Step) -> Result<Vec<Value>, BridgeError> {
        let mut records = Vec::new();

        match step {
            Step::Create { event } => {
                if self.bridge.is_some() {
                    return Err(BridgeError::Harness(
                        "component already created; destroy it first".into(),
                    ));
                }
                let bridge = IntentBridge::create(&self.config, event);
                records.push(json!({"step": "create", "channel": bridge.channel_name()}));
                self.bridge = Some(bridge);
            }
            Step::Configure => {
                self.bridge_mut()?.configure_transport();
                records.push(json!({"step": "configure"}));
            }
            Step::Listen => {
                let listener = self.bridge_mut()?.listen()?;
                self.listener = Some(listener);
                records.push(json!({"step": "listen"}));
            }
            Step::Call { method, arguments } => {
                let call = MethodCall { method, arguments };
                let response = self.bridge_mut()?.handle_method_call(&call);
                records.push(json!({
                    "step": "call",
                    "method": call.method,
                    "response": response,
                }));
            }
            Step::NewIntent { event } => {
                let record = match self.bridge_mut()?.on_new_intent(event) {
                    Ok(outcome) => outcome_record(outcome),
                    Err(e @ ChannelError::TransportUnavailable { .. }) => {
                        json!({"step": "new_intent", "error": e.to_string()})
                    }
                    Err(e) => return Err(e.into()),
                };
                records.push(record);
            }
            Step::Destroy => {
                self.bridge_mut()?;
                self.bridge = None;
                self.listener = None;
                records.push(json!({"step": "destroy"}));
            }
        }

        records.extend(self.drain_pushes());
        Ok(records)
    }

    fn bridge_mut(&mut self) -> Result<&mut IntentBridge, BridgeError> {
        self.bridge
            .as_mut()
            .ok_or_else(|| BridgeError::Harness("no component; start with a create step".into()))
    }

    fn drain_pushes(&mut self) -> Vec<Value> {
        let Some(listener) = self.listener.as_mut() else {
            return Vec::new();
        };
        std::iter::from_fn(|| listener.try_recv())
            .map(|push| json!({"push": push}))
            .collect()
    }
}

fn outcome_record(outcome: PushOutcome) -> Value {
    match outcome {
        PushOutcome::Skipped => json!({"step": "new_intent", "outcome": "skipped"}),
        PushOutcome::Dropped => json!({"step": "new_intent", "outcome": "dropped"}),
        PushOutcome::Delivered { listeners } => {
            json!({"step": "new_intent", "outcome": "delivered", "listeners": listeners})
        }
    }
}
