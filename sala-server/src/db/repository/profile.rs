//! Staff Profile Repository
//!
//! Creation goes through a raw CREATE with RETURN AFTER: `Profile` skips
//! `password_hash` on serialization, so `.content()` would silently store
//! profiles without a hash.

use super::{now_rfc3339, parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Profile, ProfileCreate};
use shared::Role;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;
use validator::Validate;

#[derive(Clone)]
pub struct ProfileRepository {
    base: BaseRepository,
}

impl ProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Profile>> {
        let profiles: Vec<Profile> = self
            .base
            .db()
            .query("SELECT * FROM profile ORDER BY display_name")
            .await?
            .take(0)?;
        Ok(profiles)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Profile>> {
        let thing = parse_record_id(id)?;
        let profile: Option<Profile> = self.base.db().select(thing).await?;
        Ok(profile)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM profile WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let profiles: Vec<Profile> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    /// Create a profile with the given role. The password is hashed here;
    /// plaintext never reaches the database.
    pub async fn create(&self, data: ProfileCreate, role: Role) -> RepoResult<Profile> {
        data.validate()
            .map_err(|e| RepoError::Validation(e.to_string()))?;
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Profile '{}' already exists",
                data.email
            )));
        }

        let password_hash = Profile::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;

        let now = now_rfc3339();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE profile SET \
                 email = $email, \
                 display_name = $display_name, \
                 role = $role, \
                 password_hash = $password_hash, \
                 created_at = $now, \
                 updated_at = $now \
                 RETURN AFTER",
            )
            .bind(("email", data.email))
            .bind(("display_name", data.display_name))
            .bind(("role", role))
            .bind(("password_hash", password_hash))
            .bind(("now", now))
            .await?;
        let created: Vec<Profile> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create profile".to_string()))
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
