//! Catalog Query Engine.

use pokedex_core::catalog::CatalogQuery;
use pokedex_core::error::CoreError;
use pokedex_core::types::DbId;
use pokedex_db::models::pokemon::Pokemon;
use pokedex_db::store::CatalogStore;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::favorites::FavoritesService;

/// Read and create operations over catalog entries.
#[derive(Debug, Clone, Copy)]
pub struct CatalogService<'a> {
    store: &'a dyn CatalogStore,
}

impl<'a> CatalogService<'a> {
    pub fn new(store: &'a dyn CatalogStore) -> Self {
        Self { store }
    }

    /// Filtered, paginated listing.
    ///
    /// With `favorites_only` set, results are restricted to the identity's
    /// favorites; an empty favorites set short-circuits to an empty page
    /// without touching the catalog.
    pub async fn find_all(
        &self,
        query: &CatalogQuery,
        identity: &AuthUser,
    ) -> AppResult<Vec<Pokemon>> {
        let mut filter = query.filter();

        if query.favorites_only {
            let favorites = FavoritesService::new(self.store)
                .favorites_for_user(&identity.username)
                .await?;
            filter.ids_in = Some(favorites.into_iter().collect());
        }

        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        let pokemons = self.store.find_pokemons(&filter, query.pagination()).await?;
        tracing::debug!(
            user_id = identity.id,
            page = query.page,
            limit = query.limit,
            favorites_only = query.favorites_only,
            count = pokemons.len(),
            "Catalog query served",
        );
        Ok(pokemons)
    }

    pub async fn find_by_id(&self, id: DbId) -> AppResult<Pokemon> {
        self.store
            .find_pokemon(id)
            .await?
            .ok_or_else(|| CoreError::not_found_id("Pokemon", id).into())
    }

    /// Exact, case-insensitive name lookup. The name is a literal.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Pokemon> {
        self.store
            .find_pokemon_by_name(name)
            .await?
            .ok_or_else(|| CoreError::not_found_name("Pokemon", name).into())
    }

    pub async fn distinct_types(&self) -> AppResult<Vec<String>> {
        Ok(self.store.distinct_types().await?)
    }

    /// Validate and insert a single entry. An existing id is a store error.
    pub async fn create(&self, pokemon: &Pokemon) -> AppResult<Pokemon> {
        pokemon.validate()?;
        let created = self.store.insert_pokemon(pokemon).await?;
        tracing::info!(id = created.id, name = %created.name, "Pokemon created");
        Ok(created)
    }
}
