//! Storage abstraction for the catalog service.
//!
//! The API layer only talks to [`CatalogStore`]. Two backends exist:
//! [`PgStore`] (PostgreSQL via the repositories) and [`MemoryStore`]
//! (process-local maps, used for development without a database and for
//! tests).

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use std::fmt::Debug;

use async_trait::async_trait;
use pokedex_core::catalog::{CatalogFilter, Pagination};
use pokedex_core::types::DbId;

use crate::models::pokemon::Pokemon;
use crate::models::user::{NewUser, User};

/// Error type for storage operations.
///
/// None of these are domain outcomes: "no such row" is reported as
/// `Ok(None)`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A key or unique column already holds a value.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// In-memory state is unusable (a writer panicked while holding a lock).
    #[error("Store poisoned: {0}")]
    Poisoned(String),
}

/// Persistence operations needed by the catalog, favorites and ingestion
/// services.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait CatalogStore: Send + Sync + Debug {
    // =========================================================================
    // Catalog entries
    // =========================================================================

    /// Look up an entry by id.
    async fn find_pokemon(&self, id: DbId) -> Result<Option<Pokemon>, StoreError>;

    /// Look up an entry whose name equals `name`, ignoring case.
    async fn find_pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError>;

    /// Entries matching `filter`, in ascending id order, windowed by `page`.
    async fn find_pokemons(
        &self,
        filter: &CatalogFilter,
        page: Pagination,
    ) -> Result<Vec<Pokemon>, StoreError>;

    /// The sorted, de-duplicated union of every entry's type tags.
    async fn distinct_types(&self) -> Result<Vec<String>, StoreError>;

    /// Insert a new entry. Never overwrites an existing id.
    async fn insert_pokemon(&self, pokemon: &Pokemon) -> Result<Pokemon, StoreError>;

    // =========================================================================
    // Users
    // =========================================================================

    async fn find_user(&self, id: DbId) -> Result<Option<User>, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails if the id or username is taken.
    async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError>;

    /// Replace a user's favorites. Returns `None` if the user does not exist.
    async fn save_favorites(
        &self,
        user_id: DbId,
        favorites: &[DbId],
    ) -> Result<Option<User>, StoreError>;

    // =========================================================================
    // Operations
    // =========================================================================

    /// Confirm the backend can serve requests.
    async fn health_check(&self) -> Result<(), StoreError>;
}
