//! Shared fixtures and request helpers for the API integration tests.
//!
//! Every test builds the production router (`build_app_router`) over a
//! fresh in-memory store, so no database is required.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use pokedex_api::auth::password::hash_password;
use pokedex_api::config::ServerConfig;
use pokedex_api::router::build_app_router;
use pokedex_api::state::AppState;
use pokedex_core::catalog::{CatalogFilter, Pagination};
use pokedex_core::types::DbId;
use pokedex_db::models::pokemon::Pokemon;
use pokedex_db::models::user::{NewUser, User};
use pokedex_db::store::{CatalogStore, MemoryStore, StoreError};
use tower::ServiceExt;

/// Bearer header for the seeded user `alice` (favorites `[2, 5]`).
pub const ALICE: &str = "Bearer alice:secret1";

/// Bearer header for the seeded user `bob` (no favorites).
pub const BOB: &str = "Bearer bob:hunter22";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        seed_file: None,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn CatalogStore>) -> Router {
    let config = test_config();
    build_app_router(AppState::new(store, config.clone()), &config)
}

/// Catalog fixture: `(id, name, types)`.
pub const POKEMONS: &[(DbId, &str, &[&str])] = &[
    (1, "Bulbasaur", &["Grass", "Poison"]),
    (2, "Ivysaur", &["Grass", "Poison"]),
    (3, "Charmander", &["Fire"]),
    (4, "Squirtle", &["Water"]),
    (5, "Oddish", &["Grass", "Poison"]),
    (6, "Pikachu", &["Electric"]),
    (7, "Mr. Mime", &["Psychic", "Fairy"]),
    (8, "Growlithe", &["Fire"]),
    (9, "Psyduck", &["Water"]),
    (10, "Caterpie", &["Bug"]),
    (11, "Bulbasaur2", &["Grass"]),
    (12, "Ultrabulb", &["Grass"]),
];

pub fn pokemon(id: DbId, name: &str, types: &[&str]) -> Pokemon {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "classification": "Test Pokémon",
        "types": types,
        "maxCP": 100,
        "maxHP": 100,
    }))
    .unwrap()
}

/// A memory store holding the catalog fixture plus `alice` and `bob`.
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    for (id, name, types) in POKEMONS {
        store
            .insert_pokemon(&pokemon(*id, name, types))
            .await
            .unwrap();
    }
    for (id, username, secret, favorites) in [
        (1, "alice", "secret1", vec![2, 5]),
        (2, "bob", "hunter22", vec![]),
    ] {
        store
            .insert_user(&NewUser {
                id,
                username: username.into(),
                password_hash: hash_password(secret).unwrap(),
                favorites,
            })
            .await
            .unwrap();
    }
    Arc::new(store)
}

/// Router over [`seeded_store`].
pub async fn seeded_app() -> Router {
    build_test_app(seeded_store().await)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, auth: &str) -> Response {
    send(app, Method::GET, uri, Some(auth), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn patch_auth(app: Router, uri: &str, auth: &str) -> Response {
    send(app, Method::PATCH, uri, Some(auth), None).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of a JSON array of catalog records, in response order.
pub fn ids(json: &serde_json::Value) -> Vec<DbId> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|p| p["id"].as_i64().expect("record without numeric id"))
        .collect()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every operation fails, for exercising 500 responses.
#[derive(Debug, Default)]
pub struct BrokenStore;

fn broken<T>() -> Result<T, StoreError> {
    Err(StoreError::Poisoned("connection string password=hunter2".into()))
}

#[async_trait]
impl CatalogStore for BrokenStore {
    async fn find_pokemon(&self, _id: DbId) -> Result<Option<Pokemon>, StoreError> {
        broken()
    }

    async fn find_pokemon_by_name(&self, _name: &str) -> Result<Option<Pokemon>, StoreError> {
        broken()
    }

    async fn find_pokemons(
        &self,
        _filter: &CatalogFilter,
        _page: Pagination,
    ) -> Result<Vec<Pokemon>, StoreError> {
        broken()
    }

    async fn distinct_types(&self) -> Result<Vec<String>, StoreError> {
        broken()
    }

    async fn insert_pokemon(&self, _pokemon: &Pokemon) -> Result<Pokemon, StoreError> {
        broken()
    }

    async fn find_user(&self, _id: DbId) -> Result<Option<User>, StoreError> {
        broken()
    }

    async fn find_user_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        broken()
    }

    async fn insert_user(&self, _user: &NewUser) -> Result<User, StoreError> {
        broken()
    }

    async fn save_favorites(
        &self,
        _user_id: DbId,
        _favorites: &[DbId],
    ) -> Result<Option<User>, StoreError> {
        broken()
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        broken()
    }
}
