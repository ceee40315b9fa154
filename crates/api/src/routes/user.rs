use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// POST  /                 -> create_user
/// GET   /favorites        -> get_favorites
/// PATCH /favorites/{id}   -> toggle_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create_user))
        .route("/favorites", get(user::get_favorites))
        .route("/favorites/{id}", patch(user::toggle_favorite))
}
