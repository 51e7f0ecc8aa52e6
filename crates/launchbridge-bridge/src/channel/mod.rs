//! The named method channel between the bridge and the application layer.
//!
//! Requests flow application -> bridge as `MethodCall`s and are answered
//! synchronously with a `MethodResponse`. Pushes flow bridge -> application
//! as `PushMessage`s on a broadcast bus; a push with nobody listening is
//! dropped.
//!
//! A channel starts detached. Until the host reports that the embedded
//! runtime is up (`attach`), there is no transport and pushes fail with
//! `ChannelError::TransportUnavailable`.

mod codec;
mod listener;

pub use codec::{
    encode_launch_event, MethodCall, MethodResponse, PushMessage, GET_INITIAL_INTENT,
    ON_NEW_INTENT,
};
pub use listener::PushListener;

use launchbridge_common::{ChannelError, LaunchEvent, NotificationBus};
use launchbridge_config::{
    ChannelConfig, DeliveryPolicy, MAX_PUSH_CAPACITY, MIN_PUSH_CAPACITY,
};
use tracing::{debug, info, warn};

use crate::dispatcher::{LaunchDispatcher, Notifier, PushOutcome};

/// Methods the application layer may call.
const KNOWN_METHODS: &[&str] = &[GET_INITIAL_INTENT];

pub fn is_method_known(method: &str) -> bool {
    KNOWN_METHODS.contains(&method)
}

pub struct MethodChannel {
    name: String,
    capacity: usize,
    delivery: DeliveryPolicy,
    bus: Option<NotificationBus<PushMessage>>,
    /// Last push nobody heard, kept only under `ReplayLast`.
    pending: Option<PushMessage>,
}

impl MethodChannel {
    /// A detached channel. Push capacity is clamped to the accepted range.
    pub fn new(config: &ChannelConfig) -> Self {
        let capacity = config.push_capacity.clamp(MIN_PUSH_CAPACITY, MAX_PUSH_CAPACITY);
        if capacity != config.push_capacity {
            warn!(
                channel = %config.name,
                requested = config.push_capacity,
                capacity,
                "push capacity out of range, clamped"
            );
        }
        Self {
            name: config.name.clone(),
            capacity: capacity as usize,
            delivery: config.delivery,
            bus: None,
            pending: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_attached(&self) -> bool {
        self.bus.is_some()
    }

    /// Bring up the transport. Repeated calls keep the existing one.
    pub fn attach(&mut self) {
        if self.bus.is_none() {
            self.bus = Some(NotificationBus::new(self.capacity));
            info!(channel = %self.name, "method channel attached");
        }
    }

    /// Attach an application-side push listener.
    pub fn subscribe(&mut self) -> Result<PushListener, ChannelError> {
        let bus = self.bus.as_ref().ok_or_else(|| self.unavailable())?;
        let rx = bus.subscribe();
        let replay = self.pending.take();
        if replay.is_some() {
            debug!(channel = %self.name, "replaying last dropped push to new listener");
        }
        Ok(PushListener::new(rx, replay))
    }

    /// Answer a request from the application layer.
    pub fn handle_call(&self, dispatcher: &LaunchDispatcher, call: &MethodCall) -> MethodResponse {
        if !is_method_known(&call.method) {
            warn!(
                channel = %self.name,
                method = %call.method,
                "method call rejected: not implemented"
            );
            return MethodResponse::NotImplemented;
        }

        debug!(channel = %self.name, method = %call.method, "method call dispatched");

        match call.method.as_str() {
            GET_INITIAL_INTENT => match dispatcher.get_initial() {
                Some(event) => match encode_launch_event(&event) {
                    Ok(value) => MethodResponse::success(value),
                    Err(e) => {
                        warn!(channel = %self.name, error = %e, "failed to encode launch event");
                        MethodResponse::no_value()
                    }
                },
                None => MethodResponse::no_value(),
            },
            _ => MethodResponse::NotImplemented,
        }
    }

    /// Invoke `method` on the application side without waiting for a reply.
    pub fn push(
        &mut self,
        method: &str,
        arguments: serde_json::Value,
    ) -> Result<PushOutcome, ChannelError> {
        let bus = self.bus.as_ref().ok_or_else(|| self.unavailable())?;

        let msg = PushMessage {
            channel: self.name.clone(),
            method: method.to_string(),
            arguments,
        };
        let keep = (self.delivery == DeliveryPolicy::ReplayLast).then(|| msg.clone());

        let listeners = bus.publish(msg);
        if listeners == 0 {
            warn!(channel = %self.name, method, "push dropped: no listener attached");
            self.pending = keep;
            return Ok(PushOutcome::Dropped);
        }

        debug!(channel = %self.name, method, listeners, "push delivered");
        self.pending = None;
        Ok(PushOutcome::Delivered { listeners })
    }

    fn unavailable(&self) -> ChannelError {
        ChannelError::TransportUnavailable {
            channel: self.name.clone(),
        }
    }
}

impl Notifier for MethodChannel {
    fn notify(&mut self, event: &LaunchEvent) -> Result<PushOutcome, ChannelError> {
        let arguments = encode_launch_event(event)?;
        self.push(ON_NEW_INTENT, arguments)
    }
}
