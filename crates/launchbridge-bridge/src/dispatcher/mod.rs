//! Lifecycle-aware dispatch of launch events.
//!
//! The dispatcher owns the single "current" host event. It starts `Cold`
//! with whatever event created the host component, and every later event
//! supersedes it (`Active`). There is no history and no terminal state;
//! dropping the dispatcher is the end of its lifecycle.


use launchbridge_common::{ChannelError, HostEvent, LaunchEvent};
use tracing::debug;

use crate::normalize::normalize;

/// Where a launch event ends up after a supersede.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The event did not normalize; nothing was sent.
    Skipped,
    /// Sent, but no listener was attached.
    Dropped,
    Delivered { listeners: usize },
}

/// Push side of the channel, as seen by the dispatcher.
pub trait Notifier {
    fn notify(&mut self, event: &LaunchEvent) -> Result<PushOutcome, ChannelError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeState {
    /// Holds the event the component was created with, if any.
    Cold { current: Option<HostEvent> },
    /// At least one supersede has happened.
    Active { current: HostEvent, supersedes: u64 },
}

pub struct LaunchDispatcher {
    state: BridgeState,
}

impl LaunchDispatcher {
    pub fn new(initial: Option<HostEvent>) -> Self {
        Self {
            state: BridgeState::Cold { current: initial },
        }
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    /// The raw host event currently retained.
    pub fn current(&self) -> Option<&HostEvent> {
        match &self.state {
            BridgeState::Cold { current } => current.as_ref(),
            BridgeState::Active { current, .. } => Some(current),
        }
    }

    pub fn supersede_count(&self) -> u64 {
        match self.state {
            BridgeState::Cold { .. } => 0,
            BridgeState::Active { supersedes, .. } => supersedes,
        }
    }

    /// Normalized view of the current event. Reading never clears it.
    pub fn get_initial(&self) -> Option<LaunchEvent> {
        self.current().and_then(normalize)
    }

    /// Replace the current event unconditionally.
    pub fn supersede(&mut self, event: HostEvent) {
        let supersedes = self.supersede_count() + 1;
        self.state = BridgeState::Active {
            current: event,
            supersedes,
        };
    }

    /// Supersede, then push the normalized event if there is one.
    ///
    /// State is updated before the push is attempted, so a transport
    /// failure still leaves the new event current.
    pub fn on_superseded(
        &mut self,
        event: HostEvent,
        notifier: &mut dyn Notifier,
    ) -> Result<PushOutcome, ChannelError> {
        self.supersede(event);

        match self.get_initial() {
            Some(launch) => notifier.notify(&launch),
            None => {
                debug!(
                    supersedes = self.supersede_count(),
                    "superseding event does not qualify, push skipped"
                );
                Ok(PushOutcome::Skipped)
            }
        }
    }
}
