//! User entity model and DTOs.

use pokedex_core::credentials::is_token_safe;
use pokedex_core::error::CoreError;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub favorites: Vec<DbId>,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub favorites: Vec<DbId>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            favorites: user.favorites,
        }
    }
}

/// Request body for registering a user. `_id` is accepted as an alias for `id`.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    #[serde(alias = "_id")]
    pub id: DbId,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub favorites: Option<Vec<DbId>>,
}

impl CreateUser {
    /// Reject values that could never be presented in a bearer token.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id < 1 {
            return Err(CoreError::Validation("id must be a positive integer".into()));
        }
        if !is_token_safe(&self.username) {
            return Err(CoreError::Validation(
                "username must be non-empty, untrimmed and must not contain ':'".into(),
            ));
        }
        if !is_token_safe(&self.password) {
            return Err(CoreError::Validation(
                "password must be non-empty, untrimmed and must not contain ':'".into(),
            ));
        }
        Ok(())
    }
}

/// Insert payload once the password has been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub favorites: Vec<DbId>,
}
