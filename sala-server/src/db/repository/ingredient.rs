//! Menu Item Ingredient Repository
//!
//! Ingredient requirements are the link rows the availability check walks:
//! one row per (menu item, inventory item) pair with the quantity needed
//! per ordered unit.

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    IngredientWithStock, MenuItemIngredient, MenuItemIngredientCreate, MenuItemIngredientUpdate,
};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "menu_item_ingredient";

#[derive(Clone)]
pub struct MenuItemIngredientRepository {
    base: BaseRepository,
}

impl MenuItemIngredientRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Requirements for one menu item
    pub async fn find_for_menu_item(&self, menu_item_id: &str) -> RepoResult<Vec<MenuItemIngredient>> {
        let menu_item = parse_record_id(menu_item_id)?;
        let rows: Vec<MenuItemIngredient> = self
            .base
            .db()
            .query("SELECT * FROM menu_item_ingredient WHERE menu_item = $menu_item")
            .bind(("menu_item", menu_item))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Requirements for one menu item joined with current stock, one query
    pub async fn find_for_menu_item_with_stock(
        &self,
        menu_item_id: &str,
    ) -> RepoResult<Vec<IngredientWithStock>> {
        let menu_item = parse_record_id(menu_item_id)?;
        let rows: Vec<IngredientWithStock> = self
            .base
            .db()
            .query(
                "SELECT *, \
                 inventory_item.name AS inventory_name, \
                 inventory_item.quantity AS inventory_quantity, \
                 inventory_item.unit AS inventory_unit \
                 FROM menu_item_ingredient WHERE menu_item = $menu_item",
            )
            .bind(("menu_item", menu_item))
            .await?
            .take(0)?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItemIngredient>> {
        let thing = parse_record_id(id)?;
        let row: Option<MenuItemIngredient> = self.base.db().select(thing).await?;
        Ok(row)
    }

    pub async fn create(&self, data: MenuItemIngredientCreate) -> RepoResult<MenuItemIngredient> {
        if data.quantity <= 0.0 {
            return Err(RepoError::Validation(
                "Ingredient quantity must be positive".to_string(),
            ));
        }

        // One requirement row per (menu item, inventory item) pair
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM menu_item_ingredient \
                 WHERE menu_item = $menu_item AND inventory_item = $inventory_item LIMIT 1",
            )
            .bind(("menu_item", data.menu_item.clone()))
            .bind(("inventory_item", data.inventory_item.clone()))
            .await?;
        let existing: Vec<MenuItemIngredient> = result.take(0)?;
        if !existing.is_empty() {
            return Err(RepoError::Duplicate(
                "Ingredient already linked to this menu item".to_string(),
            ));
        }

        let now = now_rfc3339();
        let row = MenuItemIngredient {
            id: None,
            menu_item: data.menu_item,
            inventory_item: data.inventory_item,
            quantity: data.quantity,
            unit: data.unit,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<MenuItemIngredient> =
            self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to link ingredient".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        data: MenuItemIngredientUpdate,
    ) -> RepoResult<MenuItemIngredient> {
        if data.quantity <= 0.0 {
            return Err(RepoError::Validation(
                "Ingredient quantity must be positive".to_string(),
            ));
        }

        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Ingredient link {} not found", id)))?;

        let updated = MenuItemIngredient {
            quantity: data.quantity,
            unit: data.unit,
            updated_at: Some(now_rfc3339()),
            ..existing
        };

        let result: Option<MenuItemIngredient> =
            self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Ingredient link {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
