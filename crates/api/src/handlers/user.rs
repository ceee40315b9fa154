//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pokedex_core::types::DbId;
use pokedex_db::models::user::{CreateUser, UserResponse};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/users
///
/// Register a user. The response never includes the stored secret.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = state.users().create(input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/v1/users/favorites
pub async fn get_favorites(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DbId>>> {
    let favorites = state.favorites().favorites_for_user(&user.username).await?;
    Ok(Json(favorites))
}

/// PATCH /api/v1/users/favorites/{id}
///
/// Flip membership of the entity id in the caller's favorites.
pub async fn toggle_favorite(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let entity_id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("id must be an integer, got '{raw_id}'")))?;
    let updated = state.favorites().toggle(user.id, entity_id).await?;
    Ok(Json(UserResponse::from(updated)))
}
