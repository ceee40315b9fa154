//! Bearer-credential authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use pokedex_core::credentials::parse_bearer;
use pokedex_core::error::CoreError;
use pokedex_core::types::DbId;

use crate::auth::verifier::CredentialVerifier;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Authenticated user resolved from `Authorization: Bearer <username>:<secret>`.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, username = %user.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Credentials are checked against the store on every request. The resolved
/// identity is also inserted into the request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let user = authenticate(header, &state.verifier()).await?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

/// Resolve a raw `Authorization` header value to an identity.
///
/// Every failure (absent or malformed header, unknown user, wrong secret)
/// is [`CoreError::Unauthorized`]. Store failures pass through untouched.
pub async fn authenticate(
    header: Option<&str>,
    verifier: &CredentialVerifier<'_>,
) -> AppResult<AuthUser> {
    let credentials = parse_bearer(header)?;

    let user = verifier
        .verify(&credentials.username, &credentials.secret)
        .await?
        .ok_or_else(|| {
            tracing::debug!(username = %credentials.username, "Rejected credentials");
            AppError::Core(CoreError::Unauthorized("Invalid username or password".into()))
        })?;

    Ok(AuthUser {
        id: user.id,
        username: user.username,
    })
}
