//! Database Module
//!
//! Embedded SurrealDB with the RocksDB engine. Integration tests use the
//! in-memory engine instead and share the same repository code.

pub mod models;
pub mod repository;

use anyhow::Result;
use std::path::Path;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;
use tracing::info;

pub const NAMESPACE: &str = "sala";
pub const DATABASE: &str = "sala";

/// Open (or create) the on-disk database under the given directory.
pub async fn init_database(data_dir: &Path) -> Result<Surreal<Db>> {
    let db_path = data_dir.join("sala.db");
    info!("Opening database at {}", db_path.display());

    let db = Surreal::new::<RocksDb>(db_path).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;

    Ok(db)
}

/// Select namespace and database on an already-opened connection.
/// Used by the in-memory test harness.
pub async fn select_namespace(db: &Surreal<Db>) -> Result<()> {
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    Ok(())
}
