//! Repository for the `pokemons` table.

use pokedex_core::catalog::{CatalogFilter, Pagination};
use pokedex_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::pokemon::{Pokemon, PokemonRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, classification, types, resistant, weaknesses, weight, height, \
                       flee_rate, evolution_requirements, evolutions, max_cp, max_hp, attacks";

/// Provides read and insert operations for catalog entries.
pub struct PokemonRepo;

impl PokemonRepo {
    /// Insert a new entry, returning the stored row.
    ///
    /// Fails with a unique violation if the id already exists; nothing is
    /// overwritten.
    pub async fn create(pool: &PgPool, input: &Pokemon) -> Result<Pokemon, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokemons (id, name, classification, types, resistant, weaknesses, \
                 weight, height, flee_rate, evolution_requirements, evolutions, max_cp, max_hp, attacks)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PokemonRow>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.classification)
            .bind(&input.types)
            .bind(&input.resistant)
            .bind(&input.weaknesses)
            .bind(Json(&input.weight))
            .bind(Json(&input.height))
            .bind(input.flee_rate)
            .bind(input.evolution_requirements.as_ref().map(Json))
            .bind(Json(&input.evolutions))
            .bind(input.max_cp)
            .bind(input.max_hp)
            .bind(Json(&input.attacks))
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find an entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemons WHERE id = $1");
        let row = sqlx::query_as::<_, PokemonRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Find the first entry (by id) whose name equals `name`, ignoring case.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Pokemon>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pokemons WHERE LOWER(name) = LOWER($1) ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, PokemonRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List entries matching `filter`, windowed by `page`.
    ///
    /// Absent conditions are bound as `NULL` and short-circuit to true.
    pub async fn list(
        pool: &PgPool,
        filter: &CatalogFilter,
        page: Pagination,
    ) -> Result<Vec<Pokemon>, sqlx::Error> {
        let ids: Option<Vec<DbId>> = filter
            .ids_in
            .as_ref()
            .map(|ids| ids.iter().copied().collect());
        let name_pattern = filter.name_contains.as_deref().map(like_contains_pattern);
        let types: Option<Vec<String>> = filter
            .types_any
            .as_ref()
            .map(|types| types.iter().cloned().collect());

        let query = format!(
            "SELECT {COLUMNS} FROM pokemons \
             WHERE ($1::BIGINT[] IS NULL OR id = ANY($1)) \
               AND ($2::TEXT IS NULL OR name ILIKE $2) \
               AND ($3::TEXT[] IS NULL OR types && $3) \
             ORDER BY id \
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, PokemonRow>(&query)
            .bind(ids)
            .bind(name_pattern)
            .bind(types)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Every type tag used by at least one entry, sorted.
    pub async fn distinct_types(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT t FROM pokemons, UNNEST(types) AS t ORDER BY t",
        )
        .fetch_all(pool)
        .await
    }
}

/// Turn a literal fragment into an `ILIKE` pattern matching it anywhere.
///
/// `\`, `%` and `_` are escaped with the default LIKE escape character.
pub fn like_contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
