//! Favorites Lookup and Favorites Toggle.

use pokedex_core::error::CoreError;
use pokedex_core::favorites::{toggle_favorite, FavoriteChange};
use pokedex_core::types::DbId;
use pokedex_db::models::user::User;
use pokedex_db::store::CatalogStore;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy)]
pub struct FavoritesService<'a> {
    store: &'a dyn CatalogStore,
}

impl<'a> FavoritesService<'a> {
    pub fn new(store: &'a dyn CatalogStore) -> Self {
        Self { store }
    }

    /// Favorite entity ids of the user with this exact username.
    pub async fn favorites_for_user(&self, username: &str) -> AppResult<Vec<DbId>> {
        let user = self
            .store
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| CoreError::not_found_name("User", username))?;
        Ok(user.favorites)
    }

    /// Add `entity_id` to the user's favorites if absent, remove it if present.
    ///
    /// Read-modify-write without a lock: two concurrent toggles for the same
    /// user may lose one update. The entity id is not checked against the
    /// catalog.
    pub async fn toggle(&self, user_id: DbId, entity_id: DbId) -> AppResult<User> {
        let mut user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or_else(|| CoreError::not_found_id("User", user_id))?;

        let change = toggle_favorite(&mut user.favorites, entity_id);

        let saved = self
            .store
            .save_favorites(user_id, &user.favorites)
            .await?
            .ok_or_else(|| CoreError::not_found_id("User", user_id))?;

        match change {
            FavoriteChange::Added => {
                tracing::info!(user_id, entity_id, "Favorite added")
            }
            FavoriteChange::Removed => {
                tracing::info!(user_id, entity_id, "Favorite removed")
            }
        }

        Ok(saved)
    }
}
