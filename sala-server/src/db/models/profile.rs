//! Staff Profile Model

use super::serde_helpers;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use shared::Role;
use surrealdb::RecordId;
use validator::Validate;

/// Staff profile entity
///
/// The password hash never leaves the server: it is skipped on
/// serialization, so API responses and sync payloads cannot carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Profile {
    /// Hash a plaintext password with Argon2id and a fresh salt
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against this profile's stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// Sign-up / create waiter payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileCreate {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 64))]
    pub display_name: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-in response: token plus the authenticated profile
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub token: String,
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = Profile::hash_password("hunter2").unwrap();
        let profile = Profile {
            id: None,
            email: "w@example.com".to_string(),
            display_name: "W".to_string(),
            role: Role::Waiter,
            password_hash: hash,
            created_at: None,
            updated_at: None,
        };
        assert!(profile.verify_password("hunter2"));
        assert!(!profile.verify_password("wrong"));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let profile = Profile {
            id: None,
            email: "w@example.com".to_string(),
            display_name: "W".to_string(),
            role: Role::Admin,
            password_hash: "$argon2id$secret".to_string(),
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }
}
