//! `IntentBridge`: the piece a host component owns for its whole life.
//!
//! Host callbacks map onto it one to one: creation with the launching
//! event, the embedded runtime becoming ready, requests from the
//! application layer, and new events arriving while running. Destroying
//! the component is dropping the bridge.

use launchbridge_common::{ChannelError, HostEvent};
use launchbridge_config::BridgeConfig;
use tracing::{debug, info};

use crate::channel::{MethodCall, MethodChannel, MethodResponse, PushListener};
use crate::dispatcher::{LaunchDispatcher, PushOutcome};

pub struct IntentBridge {
    dispatcher: LaunchDispatcher,
    channel: MethodChannel,
}

impl IntentBridge {
    /// Host component created, possibly with the event that launched it.
    pub fn create(config: &BridgeConfig, initial: Option<HostEvent>) -> Self {
        info!(
            channel = %config.channel.name,
            has_initial = initial.is_some(),
            "intent bridge created"
        );
        Self {
            dispatcher: LaunchDispatcher::new(initial),
            channel: MethodChannel::new(&config.channel),
        }
    }

    /// The embedded runtime is ready to exchange messages.
    pub fn configure_transport(&mut self) {
        self.channel.attach();
    }

    pub fn handle_method_call(&self, call: &MethodCall) -> MethodResponse {
        self.channel.handle_call(&self.dispatcher, call)
    }

    /// A new launch event reached the already running component.
    pub fn on_new_intent(&mut self, event: HostEvent) -> Result<PushOutcome, ChannelError> {
        let outcome = self.dispatcher.on_superseded(event, &mut self.channel)?;
        debug!(?outcome, supersedes = self.dispatcher.supersede_count(), "new intent handled");
        Ok(outcome)
    }

    /// Attach the application layer's push listener.
    pub fn listen(&mut self) -> Result<PushListener, ChannelError> {
        self.channel.subscribe()
    }

    pub fn dispatcher(&self) -> &LaunchDispatcher {
        &self.dispatcher
    }

    pub fn channel_name(&self) -> &str {
        self.channel.name()
    }

    pub fn is_transport_ready(&self) -> bool {
        self.channel.is_attached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{GET_INITIAL_INTENT, ON_NEW_INTENT};
    use launchbridge_common::Locator;
    use launchbridge_config::DeliveryPolicy;
    use serde_json::json;

    fn running(initial: Option<HostEvent>) -> IntentBridge {
        let mut bridge = IntentBridge::create(&BridgeConfig::default(), initial);
        bridge.configure_transport();
        bridge
    }

    #[test]
    fn cold_start_pull_returns_launch_event() {
        let bridge = running(Some(HostEvent::view("file:///storage/movie.mp4")));

        let response = bridge.handle_method_call(&MethodCall::new(GET_INITIAL_INTENT));
        assert_eq!(
            response,
            MethodResponse::success(json!({
                "action": "VIEW",
                "uri": "file:///storage/movie.mp4",
                "path": "/storage/movie.mp4",
                "type": ""
            }))
        );
    }

    #[test]
    fn cold_start_pull_is_repeatable() {
        let bridge = running(Some(HostEvent::view("content://media/1")));
        let call = MethodCall::new(GET_INITIAL_INTENT);
        assert_eq!(bridge.handle_method_call(&call), bridge.handle_method_call(&call));
    }

    #[test]
    fn cold_start_without_qualifying_event_pulls_null() {
        let plain_launch = HostEvent {
            action: Some("android.intent.action.MAIN".into()),
            ..Default::default()
        };
        let bridge = running(Some(plain_launch));
        assert_eq!(
            bridge.handle_method_call(&MethodCall::new(GET_INITIAL_INTENT)),
            MethodResponse::no_value()
        );
    }

    #[test]
    fn unknown_request_is_not_implemented() {
        let bridge = running(None);
        assert_eq!(
            bridge.handle_method_call(&MethodCall::new("deleteEverything")),
            MethodResponse::NotImplemented
        );
    }

    #[tokio::test]
    async fn running_event_is_pushed_exactly_once() {
        let mut bridge = running(None);
        let mut listener = bridge.listen().unwrap();

        let outcome = bridge
            .on_new_intent(HostEvent::view("content://media/99").with_mime_type("video/mp4"))
            .unwrap();
        assert_eq!(outcome, PushOutcome::Delivered { listeners: 1 });

        let push = listener.recv().await.unwrap();
        assert_eq!(push.method, ON_NEW_INTENT);
        assert_eq!(push.channel, bridge.channel_name());
        assert_eq!(
            push.arguments,
            json!({
                "action": "VIEW",
                "uri": "content://media/99",
                "path": "content://media/99",
                "type": "video/mp4"
            })
        );
        assert!(listener.try_recv().is_none());
    }

    #[test]
    fn non_qualifying_event_is_not_pushed_but_becomes_current() {
        let mut bridge = running(Some(HostEvent::view("file:///old.mp4")));
        let mut listener = bridge.listen().unwrap();

        let share = HostEvent {
            action: Some("SEND".into()),
            locator: Some(Locator::new("content://x/1")),
            mime_type: None,
        };
        assert_eq!(bridge.on_new_intent(share).unwrap(), PushOutcome::Skipped);
        assert!(listener.try_recv().is_none());

        assert_eq!(
            bridge.handle_method_call(&MethodCall::new(GET_INITIAL_INTENT)),
            MethodResponse::no_value()
        );
    }

    #[test]
    fn pull_after_supersede_reflects_latest_event() {
        let mut bridge = running(Some(HostEvent::view("file:///first.mp4")));
        bridge.on_new_intent(HostEvent::view("file:///second.mp4")).unwrap();

        let response = bridge.handle_method_call(&MethodCall::new(GET_INITIAL_INTENT));
        let result = match response {
            MethodResponse::Success { result } => result,
            other => panic!("expected success, got {other:?}"),
        };
        assert_eq!(result["path"], "/second.mp4");
    }

    #[test]
    fn push_before_listener_is_lost_by_default() {
        let mut bridge = running(None);
        assert_eq!(
            bridge.on_new_intent(HostEvent::view("file:///a.mp4")).unwrap(),
            PushOutcome::Dropped
        );
        let mut listener = bridge.listen().unwrap();
        assert!(listener.try_recv().is_none());
    }

    #[test]
    fn push_before_listener_is_replayed_when_configured() {
        let mut config = BridgeConfig::default();
        config.channel.delivery = DeliveryPolicy::ReplayLast;
        let mut bridge = IntentBridge::create(&config, None);
        bridge.configure_transport();

        bridge.on_new_intent(HostEvent::view("file:///a.mp4")).unwrap();
        let mut listener = bridge.listen().unwrap();
        assert_eq!(listener.try_recv().unwrap().arguments["path"], "/a.mp4");
    }

    #[test]
    fn new_intent_before_transport_is_unavailable_but_recorded() {
        let mut bridge = IntentBridge::create(&BridgeConfig::default(), None);
        assert!(!bridge.is_transport_ready());

        let err = bridge
            .on_new_intent(HostEvent::view("file:///early.mp4"))
            .unwrap_err();
        assert!(matches!(err, ChannelError::TransportUnavailable { .. }));
        assert_eq!(bridge.dispatcher().supersede_count(), 1);
        assert_eq!(bridge.dispatcher().get_initial().unwrap().path, "/early.mp4");
    }

    #[test]
    fn listen_before_transport_fails() {
        let mut bridge = IntentBridge::create(&BridgeConfig::default(), None);
        assert!(bridge.listen().is_err());
    }
}
