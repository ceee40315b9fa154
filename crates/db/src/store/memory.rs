//! In-memory storage backend
//!
//! Ordered maps behind `RwLock`s. Suitable for development and tests.
//! Data is lost on restart. Locks are never held across an `.await`.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use pokedex_core::catalog::{eq_ignore_case, CatalogFilter, Pagination};
use pokedex_core::types::DbId;
use tracing::info;

use super::{CatalogStore, StoreError};
use crate::models::pokemon::Pokemon;
use crate::models::user::{NewUser, User};

/// In-memory catalog store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pokemons: RwLock<BTreeMap<DbId, Pokemon>>,
    users: RwLock<BTreeMap<DbId, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read().map_err(|e| StoreError::Poisoned(e.to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write().map_err(|e| StoreError::Poisoned(e.to_string()))
}

/// Apply skip/limit to an already filtered iterator.
fn window<I: Iterator>(items: I, page: Pagination) -> impl Iterator<Item = I::Item> {
    let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(0);
    items.skip(skip).take(limit)
}

#[async_trait]
impl CatalogStore for MemoryStore {
    // =========================================================================
    // Catalog entries
    // =========================================================================

    async fn find_pokemon(&self, id: DbId) -> Result<Option<Pokemon>, StoreError> {
        Ok(read(&self.pokemons)?.get(&id).cloned())
    }

    async fn find_pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        Ok(read(&self.pokemons)?
            .values()
            .find(|p| eq_ignore_case(&p.name, name))
            .cloned())
    }

    async fn find_pokemons(
        &self,
        filter: &CatalogFilter,
        page: Pagination,
    ) -> Result<Vec<Pokemon>, StoreError> {
        let pokemons = read(&self.pokemons)?;
        let matching = pokemons
            .values()
            .filter(|p| filter.matches(p.id, &p.name, p.types.as_slice()));
        let selected: Vec<Pokemon> = window(matching, page).cloned().collect();
        Ok(selected)
    }

    async fn distinct_types(&self) -> Result<Vec<String>, StoreError> {
        let pokemons = read(&self.pokemons)?;
        let types: BTreeSet<String> = pokemons
            .values()
            .flat_map(|p| p.types.iter().cloned())
            .collect();
        Ok(types.into_iter().collect())
    }

    async fn insert_pokemon(&self, pokemon: &Pokemon) -> Result<Pokemon, StoreError> {
        let mut pokemons = write(&self.pokemons)?;
        if pokemons.contains_key(&pokemon.id) {
            return Err(StoreError::Conflict(format!(
                "pokemon id {} already exists",
                pokemon.id
            )));
        }
        pokemons.insert(pokemon.id, pokemon.clone());
        info!(id = pokemon.id, name = %pokemon.name, "Inserted pokemon");
        Ok(pokemon.clone())
    }

    // =========================================================================
    // Users
    // =========================================================================

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(read(&self.users)?.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(read(&self.users)?
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError> {
        let mut users = write(&self.users)?;
        if users.contains_key(&user.id) {
            return Err(StoreError::Conflict(format!(
                "user id {} already exists",
                user.id
            )));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict(format!(
                "username '{}' already exists",
                user.username
            )));
        }

        let created = User {
            id: user.id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            favorites: user.favorites.clone(),
        };
        users.insert(created.id, created.clone());
        info!(user_id = created.id, username = %created.username, "Inserted user");
        Ok(created)
    }

    async fn save_favorites(
        &self,
        user_id: DbId,
        favorites: &[DbId],
    ) -> Result<Option<User>, StoreError> {
        let mut users = write(&self.users)?;
        Ok(users.get_mut(&user_id).map(|user| {
            user.favorites = favorites.to_vec();
            user.clone()
        }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
