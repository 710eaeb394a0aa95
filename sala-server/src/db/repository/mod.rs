//! Repository Module
//!
//! CRUD and domain queries over the embedded SurrealDB instance.

// Catalog
pub mod category;
pub mod ingredient;
pub mod menu_item;

// Stock
pub mod inventory;

// Floor
pub mod dining_table;
pub mod reservation;

// Orders
pub mod order;

// Staff
pub mod profile;

// Re-exports
pub use category::CategoryRepository;
pub use dining_table::DiningTableRepository;
pub use ingredient::MenuItemIngredientRepository;
pub use inventory::InventoryRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use profile::ProfileRepository;
pub use reservation::ReservationRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings at the API edge, RecordId everywhere else
// =============================================================================
//
//   - parse: let id: RecordId = "menu_item:abc".parse()?;
//   - build: let id = RecordId::from_table_key("menu_item", "abc");
//   - CRUD:  db.select(id) / db.delete(id) take RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Parse a "table:id" string, mapping failure to a validation error
pub fn parse_record_id(id: &str) -> RepoResult<surrealdb::RecordId> {
    id.parse()
        .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
}

/// Current timestamp in RFC 3339, stored on every create/update
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
