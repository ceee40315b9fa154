//! Catalog query normalization and the backend-neutral filter predicate.
//!
//! Raw query-string values are turned into a [`CatalogQuery`] here, once, at
//! the transport boundary. Store backends only ever see a [`CatalogFilter`]
//! and a [`Pagination`], which they translate into their own query language.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::pokemon_types::validate_types;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page returned when `page` is absent.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `limit` is absent.
pub const DEFAULT_LIMIT: u32 = 10;

/// Separator for the `types` query parameter.
pub const TYPE_LIST_SEPARATOR: char = ',';

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// A conjunction of optional conditions over catalog entries.
///
/// `None` means "no condition". `Some` of an empty id set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Entry id must be a member of this set.
    pub ids_in: Option<BTreeSet<DbId>>,
    /// Entry name must contain this fragment, ignoring case.
    pub name_contains: Option<String>,
    /// Entry must carry at least one of these type tags.
    pub types_any: Option<BTreeSet<String>>,
}

impl CatalogFilter {
    /// Whether no entry can possibly satisfy the filter.
    pub fn matches_nothing(&self) -> bool {
        matches!(&self.ids_in, Some(ids) if ids.is_empty())
            || matches!(&self.types_any, Some(types) if types.is_empty())
    }

    /// Evaluate the filter against one entry.
    pub fn matches<S: AsRef<str>>(&self, id: DbId, name: &str, types: &[S]) -> bool {
        if let Some(ids) = &self.ids_in {
            if !ids.contains(&id) {
                return false;
            }
        }

        if let Some(fragment) = &self.name_contains {
            if !contains_ignore_case(name, fragment) {
                return false;
            }
        }

        if let Some(wanted) = &self.types_any {
            if !types.iter().any(|t| wanted.contains(t.as_ref())) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring test. The fragment is a literal, not a pattern.
pub fn contains_ignore_case(haystack: &str, fragment: &str) -> bool {
    haystack.to_lowercase().contains(&fragment.to_lowercase())
}

/// Case-insensitive whole-string equality, used for exact name lookups.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Offset/limit window applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Pagination {
    /// Window for a 1-based page number. Both inputs are already validated.
    ///
    /// A window past `i64::MAX` saturates, so it reads as an empty page.
    pub fn from_page(page: u32, limit: u32) -> Self {
        Self {
            skip: (i64::from(page) - 1).saturating_mul(i64::from(limit)),
            limit: i64::from(limit),
        }
    }
}

// ---------------------------------------------------------------------------
// Sanitized query
// ---------------------------------------------------------------------------

/// A sanitized catalog listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub page: u32,
    pub limit: u32,
    pub name_fragment: Option<String>,
    pub types: Option<BTreeSet<String>>,
    pub favorites_only: bool,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            name_fragment: None,
            types: None,
            favorites_only: false,
        }
    }
}

impl CatalogQuery {
    /// Build a query from raw query-string values.
    ///
    /// Rejects non-numeric, zero or negative `page`/`limit` and unknown type
    /// names with [`CoreError::Validation`]. Nothing is clamped.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        name: Option<&str>,
        types: Option<&str>,
        favorites_only: Option<&str>,
    ) -> Result<Self, CoreError> {
        let page = parse_positive("page", page)?.unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive("limit", limit)?.unwrap_or(DEFAULT_LIMIT);
        let types = parse_type_list(types)?;

        Ok(Self {
            page,
            limit,
            name_fragment: name.filter(|n| !n.is_empty()).map(str::to_string),
            types,
            favorites_only: is_enabled_flag(favorites_only),
        })
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_page(self.page, self.limit)
    }

    /// The name/type part of the filter. The favorites restriction needs a
    /// user lookup and is added by the caller.
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            ids_in: None,
            name_contains: self.name_fragment.clone(),
            types_any: self.types.clone(),
        }
    }
}

/// Parse an optional strictly positive integer parameter.
pub fn parse_positive(field: &str, raw: Option<&str>) -> Result<Option<u32>, CoreError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(CoreError::Validation(format!(
            "{field} must not be less than 1"
        ))),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got '{raw}'"
        ))),
    }
}

/// Split a comma-separated type list into a de-duplicated set.
///
/// Tokens are trimmed and empty tokens dropped. Returns `None` when nothing
/// is left, so `types=` behaves like an absent parameter.
pub fn parse_type_list(raw: Option<&str>) -> Result<Option<BTreeSet<String>>, CoreError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let set: BTreeSet<String> = raw
        .split(TYPE_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if set.is_empty() {
        return Ok(None);
    }

    validate_types("types", set.iter().map(String::as_str))?;
    Ok(Some(set))
}

/// `"true"` in any letter case turns a flag on; anything else leaves it off.
pub fn is_enabled_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
