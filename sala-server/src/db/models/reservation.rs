//! Reservation Model
//!
//! Reservations are created as confirmed; cancellation and completion are
//! explicit transitions.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::ReservationStatus;
use surrealdb::RecordId;

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub table: RecordId,
    pub guest_name: String,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub party_size: i32,
    /// Reservation date, "YYYY-MM-DD"
    pub date: String,
    /// Reservation time, "HH:MM"
    pub time: String,
    /// Expected duration in minutes
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default)]
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

pub fn default_duration() -> String {
    "120".to_string()
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub table: RecordId,
    pub guest_name: String,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub party_size: i32,
    pub date: String,
    pub time: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    pub notes: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
