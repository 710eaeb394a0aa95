//! Dining Table Model
//!
//! Tables carry a floor-plan position and an optional one-directional merge
//! list: the main table records the tables merged into it, the merged
//! tables themselves are left untouched.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::TableStatus;
use surrealdb::RecordId;

pub type DiningTableId = RecordId;

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<DiningTableId>,
    /// Display number, unique within the room
    pub number: i32,
    pub capacity: i32,
    #[serde(default)]
    pub status: TableStatus,
    pub notes: Option<String>,
    /// Set every time the table transitions to occupied
    pub last_occupied_at: Option<String>,
    /// Floor-plan coordinates, non-negative, 2 decimal places
    #[serde(default)]
    pub x_position: f64,
    #[serde(default)]
    pub y_position: f64,
    /// Tables merged into this one (present on the main table only)
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "serde_helpers::vec_record_id"
    )]
    pub merged_with: Vec<RecordId>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DiningTable {
    pub fn is_merged_main(&self) -> bool {
        !self.merged_with.is_empty()
    }
}

/// Clamp a floor-plan coordinate to non-negative and round to 2 decimals
pub fn clamp_position(value: f64) -> f64 {
    (value.max(0.0) * 100.0).round() / 100.0
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: i32,
    pub capacity: i32,
    pub notes: Option<String>,
    pub x_position: Option<f64>,
    pub y_position: Option<f64>,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update table status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}

/// Move table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePositionUpdate {
    pub x_position: f64,
    pub y_position: f64,
}

/// Merge tables payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMergeRequest {
    #[serde(with = "serde_helpers::vec_record_id")]
    pub other_ids: Vec<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(-3.5), 0.0);
        assert_eq!(clamp_position(0.0), 0.0);
        assert_eq!(clamp_position(12.345), 12.35);
        assert_eq!(clamp_position(7.004), 7.0);
    }
}
