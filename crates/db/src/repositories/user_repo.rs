//! Repository for the `users` table.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{NewUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, favorites";

/// Provides create, lookup and favorites persistence for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, username, password_hash, favorites)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.id)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.favorites)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a user's favorites array.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_favorites(
        pool: &PgPool,
        id: DbId,
        favorites: &[DbId],
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET favorites = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(favorites)
            .fetch_optional(pool)
            .await
    }
}
