//! Menu Category Repository

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "menu_category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Active categories in menu display order. Deactivated categories are
    /// hidden from the menu but keep their items.
    pub async fn find_all(&self) -> RepoResult<Vec<MenuCategory>> {
        let categories: Vec<MenuCategory> = self
            .base
            .db()
            .query(
                "SELECT * FROM menu_category WHERE is_active = true \
                 ORDER BY sort_order, name",
            )
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Every category including deactivated ones, for management views
    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<MenuCategory>> {
        let categories: Vec<MenuCategory> = self
            .base
            .db()
            .query("SELECT * FROM menu_category ORDER BY sort_order, name")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuCategory>> {
        let thing = parse_record_id(id)?;
        let category: Option<MenuCategory> = self.base.db().select(thing).await?;
        Ok(category)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<MenuCategory>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_category WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let categories: Vec<MenuCategory> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    pub async fn create(&self, data: MenuCategoryCreate) -> RepoResult<MenuCategory> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let now = now_rfc3339();
        let category = MenuCategory {
            id: None,
            name: data.name,
            description: data.description,
            sort_order: data.sort_order.unwrap_or(0),
            is_active: true,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        let created: Option<MenuCategory> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuCategoryUpdate) -> RepoResult<MenuCategory> {
        let thing = parse_record_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        if let Some(name) = &data.name
            && let Some(found) = self.find_by_name(name).await?
            && found.id != existing.id
        {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let updated = MenuCategory {
            id: existing.id.clone(),
            name: data.name.unwrap_or(existing.name),
            description: data.description.or(existing.description),
            sort_order: data.sort_order.unwrap_or(existing.sort_order),
            is_active: data.is_active.unwrap_or(existing.is_active),
            created_at: existing.created_at,
            updated_at: Some(now_rfc3339()),
        };

        let result: Option<MenuCategory> = self.base.db().update(thing).content(updated).await?;
        result.ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category. Refused while menu items still reference it.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(id)?;

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS count FROM menu_item WHERE category = $category GROUP ALL")
            .bind(("category", thing.clone()))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let in_use = counts
            .first()
            .and_then(|v| v.get("count"))
            .and_then(|c| c.as_i64())
            .unwrap_or(0)
            > 0;
        if in_use {
            return Err(RepoError::Validation(
                "Category still has menu items".to_string(),
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
