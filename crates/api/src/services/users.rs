//! User registration.

use pokedex_core::error::CoreError;
use pokedex_core::favorites::dedup_favorites;
use pokedex_db::models::user::{CreateUser, NewUser, User};
use pokedex_db::store::CatalogStore;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    store: &'a dyn CatalogStore,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a dyn CatalogStore) -> Self {
        Self { store }
    }

    /// Register a user. The secret is hashed before it reaches the store and
    /// repeated favorite ids are collapsed.
    pub async fn create(&self, input: CreateUser) -> AppResult<User> {
        input.validate()?;

        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
            .map_err(|e| CoreError::Internal(format!("Failed to hash password: {e}")))?;

        let new_user = NewUser {
            id: input.id,
            username: input.username,
            password_hash,
            favorites: dedup_favorites(&input.favorites.unwrap_or_default()),
        };

        let user = self.store.insert_user(&new_user).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }
}
