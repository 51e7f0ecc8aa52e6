use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

use super::codec::PushMessage;

/// Application-side receiver of pushes from a `MethodChannel`.
///
/// Only pushes sent after the listener attached are seen, plus at most one
/// replayed push when the channel runs with `DeliveryPolicy::ReplayLast`.
pub struct PushListener {
    rx: broadcast::Receiver<PushMessage>,
    replay: Option<PushMessage>,
}

impl PushListener {
    pub(super) fn new(rx: broadcast::Receiver<PushMessage>, replay: Option<PushMessage>) -> Self {
        Self { rx, replay }
    }

    /// Wait for the next push. `None` once the channel is gone.
    pub async fn recv(&mut self) -> Option<PushMessage> {
        if let Some(msg) = self.replay.take() {
            return Some(msg);
        }
        loop {
            match self.rx.recv().await {
                Ok(msg) => return Some(msg),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "push listener lagged, oldest pushes lost");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next push if one is already waiting.
    pub fn try_recv(&mut self) -> Option<PushMessage> {
        if let Some(msg) = self.replay.take() {
            return Some(msg);
        }
        loop {
            match self.rx.try_recv() {
                Ok(msg) => return Some(msg),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "push listener lagged, oldest pushes lost");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
