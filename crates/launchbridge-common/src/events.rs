use tokio::sync::broadcast;

/// Fire-and-forget fan-out to whoever is listening right now.
///
/// Nothing is buffered for receivers that subscribe later; a publish with
/// no receivers is silently dropped and reports zero.
pub struct NotificationBus<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> NotificationBus<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Returns the number of receivers the message reached.
    pub fn publish(&self, msg: T) -> usize {
        self.sender.send(msg).unwrap_or(0)
    }
}
