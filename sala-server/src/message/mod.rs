//! Message Bus
//!
//! In-process broadcast channel for resource change notifications. Every
//! mutation publishes a [`BusMessage`] and connected clients (or other
//! parts of the server) subscribe for live updates.

use shared::BusMessage;
use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 256;

/// Broadcast bus for server-wide events
#[derive(Debug)]
pub struct MessageBus {
    sender: broadcast::Sender<BusMessage>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a message to all current subscribers.
    /// Returns the number of subscribers that received it; zero subscribers
    /// is not an error.
    pub fn publish(&self, message: BusMessage) -> usize {
        debug!(event_type = %message.event_type, "Publishing bus message");
        self.sender.send(message).unwrap_or(0)
    }

    /// Subscribe to all future messages
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EventType, SyncPayload};

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = MessageBus::new();
        let mut rx = bus.subscribe();

        let payload = SyncPayload {
            resource: "menu_item".to_string(),
            version: 1,
            action: "created".to_string(),
            id: "menu_item:m1".to_string(),
            data: None,
        };
        let delivered = bus.publish(BusMessage::sync(&payload));
        assert_eq!(delivered, 1);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.event_type, EventType::Sync);
        let parsed: SyncPayload = received.parse_payload().unwrap();
        assert_eq!(parsed.resource, "menu_item");
        assert_eq!(parsed.version, 1);
    }

    #[test]
    fn test_publish_without_subscribers_is_ok() {
        let bus = MessageBus::new();
        let payload = SyncPayload {
            resource: "order".to_string(),
            version: 1,
            action: "deleted".to_string(),
            id: "order:o1".to_string(),
            data: None,
        };
        assert_eq!(bus.publish(BusMessage::sync(&payload)), 0);
    }
}
