//! Server state
//!
//! Shared handle passed to every handler: configuration, database,
//! message bus, JWT service and the per-resource sync version counters.

use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use shared::{BusMessage, SyncPayload};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db;
use crate::message::MessageBus;

/// Monotonic per-resource version counters for sync broadcasts.
/// DashMap keeps increments lock-free across handlers.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new version; unseen resources start at 1
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Shared server state, cheap to clone (Arc internals)
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub message_bus: Arc<MessageBus>,
    pub jwt_service: Arc<JwtService>,
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    /// Open the database and wire up the services
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db = db::init_database(&config.database_dir()).await?;

        Ok(Self {
            config: config.clone(),
            db,
            message_bus: Arc::new(MessageBus::new()),
            jwt_service: Arc::new(JwtService::new(&config.jwt_secret)),
            resource_versions: Arc::new(ResourceVersions::new()),
        })
    }

    /// State over an existing connection, used by the test harness
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));
        Self {
            config,
            db,
            message_bus: Arc::new(MessageBus::new()),
            jwt_service,
            resource_versions: Arc::new(ResourceVersions::new()),
        }
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Broadcast a resource change to all subscribers. The version is
    /// incremented here so every published change carries a fresh one.
    ///
    /// - `resource`: collection name ("order", "menu_item", ...)
    /// - `action`: "created", "updated" or "deleted"
    /// - `data`: the changed record, None for deletions
    pub fn broadcast_sync<T: serde::Serialize>(
        &self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
    ) {
        let version = self.resource_versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        let _ = self.message_bus.publish(BusMessage::sync(&payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_versions_increment_per_resource() {
        let versions = ResourceVersions::new();
        assert_eq!(versions.get("order"), 0);
        assert_eq!(versions.increment("order"), 1);
        assert_eq!(versions.increment("order"), 2);
        assert_eq!(versions.increment("menu_item"), 1);
        assert_eq!(versions.get("order"), 2);
    }
}
