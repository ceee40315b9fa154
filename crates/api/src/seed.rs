//! Catalog seed files.
//!
//! A seed file is a JSON array of catalog records in the same camelCase shape
//! the API serves. Ids may be numbers or decimal strings (`"001"`), and `_id`
//! is accepted in place of `id`.

use std::path::{Path, PathBuf};

use pokedex_db::models::pokemon::Pokemon;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Seed file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Seed file must contain a JSON array of records")]
    NotAnArray,

    #[error("Seed record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Read and parse a seed file.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Pokemon>, SeedError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let records = parse_seed(&raw)?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded seed file");
    Ok(records)
}

/// Parse seed file contents.
pub fn parse_seed(raw: &str) -> Result<Vec<Pokemon>, SeedError> {
    let Value::Array(items) = serde_json::from_str::<Value>(raw)? else {
        return Err(SeedError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            parse_record(item).map_err(|reason| SeedError::InvalidRecord { index, reason })
        })
        .collect()
}

fn parse_record(item: Value) -> Result<Pokemon, String> {
    let Value::Object(mut fields) = item else {
        return Err("record is not a JSON object".into());
    };

    let raw_id = match fields.remove("id") {
        Some(id) => {
            fields.remove("_id");
            id
        }
        None => fields.remove("_id").ok_or("record has no id")?,
    };
    fields.insert("id".into(), Value::from(normalize_id(&raw_id)?));

    serde_json::from_value(Value::Object(fields)).map_err(|e| e.to_string())
}

fn normalize_id(raw: &Value) -> Result<i64, String> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("id {n} is not an integer")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("id '{s}' is not an integer")),
        other => Err(format!("id {other} is neither a number nor a string")),
    }
}
