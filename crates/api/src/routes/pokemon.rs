use axum::routing::get;
use axum::Router;

use crate::handlers::pokemon;
use crate::state::AppState;

/// Catalog routes mounted at `/pokemons`.
///
/// ```text
/// GET  /              -> list_pokemons
/// POST /              -> create_pokemon
/// GET  /types         -> list_types
/// GET  /id/{id}       -> get_by_id
/// GET  /name/{name}   -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(pokemon::list_pokemons).post(pokemon::create_pokemon),
        )
        .route("/types", get(pokemon::list_types))
        .route("/id/{id}", get(pokemon::get_by_id))
        .route("/name/{name}", get(pokemon::get_by_name))
}
