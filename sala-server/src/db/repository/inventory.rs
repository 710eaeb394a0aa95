//! Inventory Repository
//!
//! Stock levels change only through recorded movements: "in" adds, "out"
//! subtracts, and a movement that would drive stock negative is rejected
//! before anything is written.

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, InventoryMovement,
    InventoryMovementCreate,
};
use shared::MovementType;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "inventory_item";
const MOVEMENT_TABLE: &str = "inventory_movement";

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .base
            .db()
            .query("SELECT * FROM inventory_item ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Items at or below their reorder threshold
    pub async fn find_low_stock(&self) -> RepoResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .base
            .db()
            .query("SELECT * FROM inventory_item WHERE quantity <= minimum_quantity ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<InventoryItem>> {
        let thing = parse_record_id(id)?;
        let item: Option<InventoryItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<InventoryItem>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM inventory_item WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let items: Vec<InventoryItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    pub async fn create(&self, data: InventoryItemCreate) -> RepoResult<InventoryItem> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Inventory item '{}' already exists",
                data.name
            )));
        }

        let quantity = data.quantity.unwrap_or(0.0);
        if quantity < 0.0 {
            return Err(RepoError::Validation(
                "Initial quantity must not be negative".to_string(),
            ));
        }

        let now = now_rfc3339();
        let item = InventoryItem {
            id: None,
            name: data.name,
            quantity,
            unit: data.unit,
            minimum_quantity: data.minimum_quantity.unwrap_or(0.0),
            supplier: data.supplier,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<InventoryItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create inventory item".to_string()))
    }

    pub async fn update(&self, id: &str, data: InventoryItemUpdate) -> RepoResult<InventoryItem> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", id)))?;

        if let Some(name) = &data.name
            && let Some(found) = self.find_by_name(name).await?
            && found.id != existing.id
        {
            return Err(RepoError::Duplicate(format!(
                "Inventory item '{}' already exists",
                name
            )));
        }

        let updated = InventoryItem {
            id: existing.id.clone(),
            name: data.name.unwrap_or(existing.name),
            quantity: existing.quantity,
            unit: data.unit.unwrap_or(existing.unit),
            minimum_quantity: data.minimum_quantity.unwrap_or(existing.minimum_quantity),
            supplier: data.supplier.or(existing.supplier),
            created_at: existing.created_at,
            updated_at: Some(now_rfc3339()),
        };

        let result: Option<InventoryItem> = self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Record a stock movement and apply its delta to the item.
    /// Returns the updated item.
    pub async fn record_movement(
        &self,
        item_id: &str,
        data: InventoryMovementCreate,
    ) -> RepoResult<InventoryItem> {
        if data.quantity <= 0.0 {
            return Err(RepoError::Validation(
                "Movement quantity must be positive".to_string(),
            ));
        }

        let thing = parse_record_id(item_id)?;
        let existing = self
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", item_id)))?;

        let new_quantity = match data.movement_type {
            MovementType::In => existing.quantity + data.quantity,
            MovementType::Out => existing.quantity - data.quantity,
        };
        if new_quantity < 0.0 {
            return Err(RepoError::Validation(format!(
                "Movement would drive '{}' below zero ({} on hand, {} out)",
                existing.name, existing.quantity, data.quantity
            )));
        }

        let movement = InventoryMovement {
            id: None,
            inventory_item: thing.clone(),
            movement_type: data.movement_type,
            quantity: data.quantity,
            reason: data.reason,
            created_at: Some(now_rfc3339()),
        };
        let _: Option<InventoryMovement> = self
            .base
            .db()
            .create(MOVEMENT_TABLE)
            .content(movement)
            .await?;

        self.base
            .db()
            .query("UPDATE $thing SET quantity = $quantity, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("quantity", new_quantity))
            .bind(("updated_at", now_rfc3339()))
            .await?;

        self.find_by_id(item_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", item_id)))
    }

    /// Movement history for one item, newest first
    pub async fn find_movements(&self, item_id: &str) -> RepoResult<Vec<InventoryMovement>> {
        let thing = parse_record_id(item_id)?;
        let movements: Vec<InventoryMovement> = self
            .base
            .db()
            .query(
                "SELECT * FROM inventory_movement WHERE inventory_item = $thing \
                 ORDER BY created_at DESC",
            )
            .bind(("thing", thing))
            .await?
            .take(0)?;
        Ok(movements)
    }

    /// Delete an item along with its movement history and ingredient links
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        self.base
            .db()
            .query("DELETE inventory_movement WHERE inventory_item = $thing")
            .query("DELETE menu_item_ingredient WHERE inventory_item = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
