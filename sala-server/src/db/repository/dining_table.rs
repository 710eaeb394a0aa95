//! Dining Table Repository
//!
//! Merge is one-directional: only the main table records the merge, the
//! merged tables are left untouched so unmerge is a single-row write.

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    clamp_position, DiningTable, DiningTableCreate, DiningTableUpdate,
};
use shared::TableStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing = parse_record_id(id)?;
        let table: Option<DiningTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    pub async fn find_by_number(&self, number: i32) -> RepoResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE number = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        if data.capacity <= 0 {
            return Err(RepoError::Validation(
                "Capacity must be positive".to_string(),
            ));
        }
        if self.find_by_number(data.number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                data.number
            )));
        }

        let now = now_rfc3339();
        let table = DiningTable {
            id: None,
            number: data.number,
            capacity: data.capacity,
            status: TableStatus::Free,
            notes: data.notes,
            last_occupied_at: None,
            x_position: clamp_position(data.x_position.unwrap_or(0.0)),
            y_position: clamp_position(data.y_position.unwrap_or(0.0)),
            merged_with: Vec::new(),
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))?;

        if let Some(number) = data.number
            && let Some(found) = self.find_by_number(number).await?
            && found.id != existing.id
        {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                number
            )));
        }
        if let Some(capacity) = data.capacity
            && capacity <= 0
        {
            return Err(RepoError::Validation(
                "Capacity must be positive".to_string(),
            ));
        }

        self.base
            .db()
            .query("UPDATE $thing SET number = $number, capacity = $capacity, notes = $notes, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("number", data.number.unwrap_or(existing.number)))
            .bind(("capacity", data.capacity.unwrap_or(existing.capacity)))
            .bind(("notes", data.notes.or(existing.notes)))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))
    }

    /// Set occupancy status. Transitioning to occupied stamps
    /// `last_occupied_at`.
    pub async fn set_status(&self, id: &str, status: TableStatus) -> RepoResult<DiningTable> {
        let thing = parse_record_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))?;

        let now = now_rfc3339();
        if status == TableStatus::Occupied {
            self.base
                .db()
                .query("UPDATE $thing SET status = $status, last_occupied_at = $now, updated_at = $now")
                .bind(("thing", thing))
                .bind(("status", status))
                .bind(("now", now))
                .await?;
        } else {
            self.base
                .db()
                .query("UPDATE $thing SET status = $status, updated_at = $now")
                .bind(("thing", thing))
                .bind(("status", status))
                .bind(("now", now))
                .await?;
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))
    }

    /// Move a table on the floor plan. Coordinates are clamped to
    /// non-negative and rounded to 2 decimals.
    pub async fn set_position(&self, id: &str, x: f64, y: f64) -> RepoResult<DiningTable> {
        let thing = parse_record_id(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE $thing SET x_position = $x, y_position = $y, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("x", clamp_position(x)))
            .bind(("y", clamp_position(y)))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))
    }

    /// Merge other tables into the main table. Writes `merged_with` on the
    /// main table only; every other table's row stays exactly as it was.
    pub async fn merge(&self, main_id: &str, other_ids: Vec<String>) -> RepoResult<DiningTable> {
        if other_ids.is_empty() {
            return Err(RepoError::Validation(
                "Merge requires at least one other table".to_string(),
            ));
        }

        let main_thing = parse_record_id(main_id)?;
        let mut others: Vec<RecordId> = Vec::with_capacity(other_ids.len());
        for id in &other_ids {
            let thing = parse_record_id(id)?;
            if thing == main_thing {
                return Err(RepoError::Validation(
                    "A table cannot be merged with itself".to_string(),
                ));
            }
            if others.contains(&thing) {
                return Err(RepoError::Validation(format!(
                    "Table {} listed twice in merge",
                    id
                )));
            }
            others.push(thing);
        }

        self.find_by_id(main_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", main_id)))?;
        for (thing, id) in others.iter().zip(&other_ids) {
            let found: Option<DiningTable> = self.base.db().select(thing.clone()).await?;
            if found.is_none() {
                return Err(RepoError::NotFound(format!("Table {} not found", id)));
            }
        }

        self.base
            .db()
            .query("UPDATE $thing SET merged_with = $merged_with, updated_at = $updated_at")
            .bind(("thing", main_thing))
            .bind(("merged_with", others))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(main_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", main_id)))
    }

    /// Clear the merge list on the main table
    pub async fn unmerge(&self, main_id: &str) -> RepoResult<DiningTable> {
        let thing = parse_record_id(main_id)?;
        self.find_by_id(main_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", main_id)))?;

        self.base
            .db()
            .query("UPDATE $thing SET merged_with = [], updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(main_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", main_id)))
    }

    /// Delete a table. Refused while open orders or confirmed reservations
    /// still reference it.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;

        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() AS count FROM order \
                 WHERE table = $thing AND status NOT IN ['paid', 'cancelled'] GROUP ALL",
            )
            .bind(("thing", thing.clone()))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let open_orders = counts
            .first()
            .and_then(|v| v.get("count"))
            .and_then(|c| c.as_i64())
            .unwrap_or(0)
            > 0;
        if open_orders {
            return Err(RepoError::Validation(
                "Table still has open orders".to_string(),
            ));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
