//! Shared test harness: fresh in-memory database per test.

use surrealdb::engine::local::{Db, Mem};
use surrealdb::Surreal;

pub async fn memory_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.expect("open memory db");
    sala_server::db::select_namespace(&db)
        .await
        .expect("select namespace");
    db
}
