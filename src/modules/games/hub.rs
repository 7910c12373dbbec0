use tokio::sync::broadcast;

use playdeck_core::GameNotification;

/// Fan-out of game notifications to every connected subscriber.
///
/// Backed by a bounded broadcast channel. A subscriber that falls more than
/// `capacity` messages behind skips the oldest ones instead of blocking
/// publishers.
#[derive(Debug, Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<GameNotification>,
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes `notification`. Returns how many subscribers will see it.
    pub fn publish(&self, notification: GameNotification) -> usize {
        // An error only means nobody is listening right now.
        self.sender.send(notification).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameNotification> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
