pub mod health;
pub mod pokemon;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pokemons                       list (auth required), create
/// /pokemons/types                 distinct type tags
/// /pokemons/id/{id}               get by id
/// /pokemons/name/{name}           get by exact name
///
/// /users                          register
/// /users/favorites                caller's favorite ids (auth required)
/// /users/favorites/{id}           toggle favorite (PATCH, auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pokemons", pokemon::router())
        .nest("/users", user::router())
}
