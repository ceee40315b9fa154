//! Query-string types for API handlers.
//!
//! Values are taken as raw strings so that malformed numbers surface as the
//! API's own 400 envelope instead of axum's query rejection.

use pokedex_core::catalog::CatalogQuery;
use serde::Deserialize;

use crate::error::AppResult;

/// `GET /pokemons?page=&limit=&name=&types=&favoritesOnly=`
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQueryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
    pub types: Option<String>,
    #[serde(rename = "favoritesOnly")]
    pub favorites_only: Option<String>,
}

impl CatalogQueryParams {
    pub fn into_query(self) -> AppResult<CatalogQuery> {
        Ok(CatalogQuery::parse(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.name.as_deref(),
            self.types.as_deref(),
            self.favorites_only.as_deref(),
        )?)
    }
}
