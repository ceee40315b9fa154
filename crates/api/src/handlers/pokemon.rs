//! Handlers for the `/pokemons` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pokedex_core::types::DbId;
use pokedex_db::models::pokemon::Pokemon;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::query::CatalogQueryParams;
use crate::state::AppState;

/// GET /api/v1/pokemons
///
/// Filtered, paginated listing. Requires authentication so that
/// `favoritesOnly=true` can resolve the caller's favorites.
pub async fn list_pokemons(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> AppResult<Json<Vec<Pokemon>>> {
    let query = params.into_query()?;
    let pokemons = state.catalog().find_all(&query, &user).await?;
    Ok(Json(pokemons))
}

/// GET /api/v1/pokemons/types
pub async fn list_types(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.catalog().distinct_types().await?))
}

/// GET /api/v1/pokemons/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Pokemon>> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("id must be an integer, got '{raw_id}'")))?;
    Ok(Json(state.catalog().find_by_id(id).await?))
}

/// GET /api/v1/pokemons/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Pokemon>> {
    Ok(Json(state.catalog().find_by_name(&name).await?))
}

/// POST /api/v1/pokemons
pub async fn create_pokemon(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<Pokemon>,
) -> AppResult<impl IntoResponse> {
    let created = state.catalog().create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
