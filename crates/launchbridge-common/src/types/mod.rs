//! Host-side and canonical launch event types.
//!
//! `HostEvent` mirrors what the host environment hands over, with every
//! field optional. `LaunchEvent` is the canonical record the bridge
//! delivers; it carries no wire-format knowledge.

mod event;
mod locator;

pub use event::{Action, HostEvent, LaunchEvent};
pub use locator::Locator;
