use std::sync::Arc;

use pokedex_db::store::{CatalogStore, MemoryStore, PgStore, StoreError};

use crate::auth::verifier::CredentialVerifier;
use crate::config::ServerConfig;
use crate::services::catalog::CatalogService;
use crate::services::favorites::FavoritesService;
use crate::services::users::UserService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog and user persistence.
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn verifier(&self) -> CredentialVerifier<'_> {
        CredentialVerifier::new(self.store.as_ref())
    }

    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(self.store.as_ref())
    }

    pub fn favorites(&self) -> FavoritesService<'_> {
        FavoritesService::new(self.store.as_ref())
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self.store.as_ref())
    }
}

/// Open the store selected by configuration: PostgreSQL when
/// `DATABASE_URL` is set, the in-memory store otherwise.
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn CatalogStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url, config.db_max_connections).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
