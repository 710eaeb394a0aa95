//! Menu Item Repository
//!
//! Enforces the pricing-mode rules on write: weight-based items always store
//! `price = 0` and a per-kilogram price converted from the entered
//! per-hectogram figure; fixed-price items store no `price_per_kg`.

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    clamp_spiciness, per_hg_to_per_kg, MenuItem, MenuItemCreate, MenuItemUpdate,
};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<MenuItem>> {
        let category = parse_record_id(category_id)?;
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE category = $category ORDER BY name")
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let thing = parse_record_id(id)?;
        let item: Option<MenuItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let is_weight_based = data.is_weight_based.unwrap_or(false);

        let (price, price_per_kg) = if is_weight_based {
            let per_hg = data.price_per_hg.ok_or_else(|| {
                RepoError::Validation("Weight-based items require price_per_hg".to_string())
            })?;
            if per_hg <= 0.0 {
                return Err(RepoError::Validation(
                    "price_per_hg must be positive".to_string(),
                ));
            }
            (0.0, Some(per_hg_to_per_kg(per_hg)))
        } else {
            let price = data.price.ok_or_else(|| {
                RepoError::Validation("Fixed-price items require price".to_string())
            })?;
            if price < 0.0 {
                return Err(RepoError::Validation("price must not be negative".to_string()));
            }
            (price, None)
        };

        let now = now_rfc3339();
        let item = MenuItem {
            id: None,
            category: data.category,
            name: data.name,
            description: data.description,
            price,
            is_available: true,
            preparation_time: data.preparation_time,
            allergens: data.allergens,
            is_vegetarian: data.is_vegetarian.unwrap_or(false),
            is_vegan: data.is_vegan.unwrap_or(false),
            is_gluten_free: data.is_gluten_free.unwrap_or(false),
            spiciness_level: clamp_spiciness(data.spiciness_level.unwrap_or(0)),
            is_weight_based,
            price_per_kg,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        let is_weight_based = data.is_weight_based.unwrap_or(existing.is_weight_based);

        // Re-apply the pricing-mode rules after merging in the patch
        let (price, price_per_kg) = if is_weight_based {
            let per_kg = data
                .price_per_hg
                .map(per_hg_to_per_kg)
                .or(existing.price_per_kg)
                .ok_or_else(|| {
                    RepoError::Validation("Weight-based items require price_per_hg".to_string())
                })?;
            if per_kg <= 0.0 {
                return Err(RepoError::Validation(
                    "price_per_hg must be positive".to_string(),
                ));
            }
            (0.0, Some(per_kg))
        } else {
            let price = data.price.unwrap_or(existing.price);
            if price < 0.0 {
                return Err(RepoError::Validation("price must not be negative".to_string()));
            }
            (price, None)
        };

        let updated = MenuItem {
            id: existing.id.clone(),
            category: data.category.unwrap_or(existing.category),
            name: data.name.unwrap_or(existing.name),
            description: data.description.or(existing.description),
            price,
            is_available: data.is_available.unwrap_or(existing.is_available),
            preparation_time: data.preparation_time.or(existing.preparation_time),
            allergens: data.allergens.unwrap_or(existing.allergens),
            is_vegetarian: data.is_vegetarian.unwrap_or(existing.is_vegetarian),
            is_vegan: data.is_vegan.unwrap_or(existing.is_vegan),
            is_gluten_free: data.is_gluten_free.unwrap_or(existing.is_gluten_free),
            spiciness_level: clamp_spiciness(
                data.spiciness_level.unwrap_or(existing.spiciness_level),
            ),
            is_weight_based,
            price_per_kg,
            created_at: existing.created_at,
            updated_at: Some(now_rfc3339()),
        };

        let result: Option<MenuItem> = self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Delete a menu item along with its ingredient requirements
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;
        self.base
            .db()
            .query("DELETE menu_item_ingredient WHERE menu_item = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
