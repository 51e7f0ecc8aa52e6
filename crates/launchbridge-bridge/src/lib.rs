//! Intent bridge between a host environment and an embedded application.
//!
//! - `normalize`: host launch event -> canonical `LaunchEvent`, or nothing
//! - `dispatcher`: tracks the current event across the host component's
//!   lifecycle and decides between pull and push delivery
//! - `channel`: the method channel contract (calls, responses, pushes)
//! - `facade`: `IntentBridge`, the object a host component owns

pub mod channel;
pub mod dispatcher;
pub mod facade;
pub mod normalize;

pub use channel::{MethodCall, MethodChannel, MethodResponse, PushListener, PushMessage};
pub use dispatcher::{BridgeState, LaunchDispatcher, Notifier, PushOutcome};
pub use facade::IntentBridge;
pub use normalize::normalize;
