//! Message bus types
//!
//! Shared between the server and clients for change notification. The
//! server publishes a coarse per-resource sync signal after every write;
//! clients react by re-fetching the affected collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Message bus event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// System notification
    Notification = 0,
    /// Collection sync signal
    Sync = 1,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Notification => write!(f, "notification"),
            EventType::Sync => write!(f, "sync"),
        }
    }
}

/// Collection-level change notification
///
/// Coarse-grained on purpose: the payload tells clients *which* resource
/// changed, not how. `version` increases monotonically per resource so a
/// client can discard stale signals after a reconnect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Resource collection name ("order", "menu_item", "dining_table", ...)
    pub resource: String,
    /// Monotonic per-resource version
    pub version: u64,
    /// Change type ("created", "updated", "deleted")
    pub action: String,
    /// Record id
    pub id: String,
    /// Changed record, absent for deletions
    pub data: Option<serde_json::Value>,
}

/// Message bus envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    pub request_id: Uuid,
    pub event_type: EventType,
    pub payload: Vec<u8>,
}

impl BusMessage {
    pub fn new(event_type: EventType, payload: Vec<u8>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            event_type,
            payload,
        }
    }

    /// Create a sync signal message. `SyncPayload` serialization cannot
    /// fail; an empty payload would only ever signal a bug in serde itself.
    pub fn sync(payload: &SyncPayload) -> Self {
        Self::new(
            EventType::Sync,
            serde_json::to_vec(payload).unwrap_or_default(),
        )
    }

    /// Parse the payload into a concrete type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_message_round_trip() {
        let payload = SyncPayload {
            resource: "dining_table".to_string(),
            version: 3,
            action: "updated".to_string(),
            id: "dining_table:t1".to_string(),
            data: None,
        };

        let msg = BusMessage::sync(&payload);
        assert_eq!(msg.event_type, EventType::Sync);
        assert!(!msg.request_id.is_nil());

        let parsed: SyncPayload = msg.parse_payload().unwrap();
        assert_eq!(parsed, payload);
    }
}
