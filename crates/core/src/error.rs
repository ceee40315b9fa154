use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with {field} {value} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Lookup by primary key found nothing.
    pub fn not_found_id(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    /// Lookup by a name-like key found nothing.
    pub fn not_found_name(entity: &'static str, name: &str) -> Self {
        CoreError::NotFound {
            entity,
            field: "name",
            value: name.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}
