//! PostgreSQL storage backend.
//!
//! A thin adapter from [`CatalogStore`] onto [`PokemonRepo`] and
//! [`UserRepo`]. Unique violations are passed through as
//! [`StoreError::Database`]; classifying them is the caller's business.

use async_trait::async_trait;
use pokedex_core::catalog::{CatalogFilter, Pagination};
use pokedex_core::types::DbId;
use tracing::info;

use super::{CatalogStore, StoreError};
use crate::models::pokemon::Pokemon;
use crate::models::user::{NewUser, User};
use crate::repositories::{PokemonRepo, UserRepo};
use crate::DbPool;

/// PostgreSQL-backed catalog store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    /// Connect, verify connectivity and apply pending migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        info!(max_connections, "Database connection pool created");

        crate::health_check(&pool).await?;
        info!("Database health check passed");

        crate::run_migrations(&pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (migrations are assumed to be applied).
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn find_pokemon(&self, id: DbId) -> Result<Option<Pokemon>, StoreError> {
        Ok(PokemonRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        Ok(PokemonRepo::find_by_name(&self.pool, name).await?)
    }

    async fn find_pokemons(
        &self,
        filter: &CatalogFilter,
        page: Pagination,
    ) -> Result<Vec<Pokemon>, StoreError> {
        Ok(PokemonRepo::list(&self.pool, filter, page).await?)
    }

    async fn distinct_types(&self) -> Result<Vec<String>, StoreError> {
        Ok(PokemonRepo::distinct_types(&self.pool).await?)
    }

    async fn insert_pokemon(&self, pokemon: &Pokemon) -> Result<Pokemon, StoreError> {
        Ok(PokemonRepo::create(&self.pool, pokemon).await?)
    }

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, user).await?)
    }

    async fn save_favorites(
        &self,
        user_id: DbId,
        favorites: &[DbId],
    ) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::set_favorites(&self.pool, user_id, favorites).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
