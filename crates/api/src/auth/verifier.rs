//! Credential Verifier: checks a username/secret pair against stored users.

use pokedex_core::error::CoreError;
use pokedex_db::models::user::User;
use pokedex_db::store::CatalogStore;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};

/// Resolves a username/secret pair to a stored user.
///
/// Stateless and side-effect free. A wrong secret or unknown username is
/// reported as `Ok(None)`; the caller decides what that means.
#[derive(Debug, Clone, Copy)]
pub struct CredentialVerifier<'a> {
    store: &'a dyn CatalogStore,
}

impl<'a> CredentialVerifier<'a> {
    pub fn new(store: &'a dyn CatalogStore) -> Self {
        Self { store }
    }

    pub async fn verify(&self, username: &str, secret: &str) -> AppResult<Option<User>> {
        let Some(user) = self.store.find_user_by_username(username).await? else {
            return Ok(None);
        };

        // Argon2 is CPU-bound; keep it off the async workers.
        let secret = secret.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&secret, &hash))
            .await
            .map_err(|e| {
                AppError::InternalError(format!("Password verification task failed: {e}"))
            })?
            .map_err(|e| {
                CoreError::Internal(format!(
                    "Stored credential for user {} is unreadable: {e}",
                    user.id
                ))
            })?;

        Ok(matches.then_some(user))
    }
}
