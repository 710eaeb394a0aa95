//! Shared types for the Sala front-of-house system
//!
//! Status enums, availability reports and message bus payloads used by
//! both the server and its clients.

pub mod availability;
pub mod message;
pub mod status;

// Re-exports
pub use availability::{AvailabilityReport, MissingIngredient};
pub use message::{BusMessage, EventType, SyncPayload};
pub use status::{
    MovementType, OrderItemStatus, OrderStatus, ReservationStatus, Role, TableStatus,
};
