//! Catalog entry model.
//!
//! The wire format mirrors the upstream catalog data set (camelCase keys,
//! `maxCP`/`maxHP`). The same struct is accepted on creation and returned on
//! reads.

use pokedex_core::error::CoreError;
use pokedex_core::pokemon_types::validate_types;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A `{minimum, maximum}` range, kept as display strings ("6.04kg").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub minimum: String,
    pub maximum: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRequirements {
    pub amount: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(rename = "type")]
    pub attack_type: String,
    pub damage: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attacks {
    #[serde(default)]
    pub fast: Vec<Attack>,
    #[serde(default)]
    pub special: Vec<Attack>,
}

/// A catalog entry.
///
/// Only `id`, `name` and `types` are required on input; descriptive fields
/// default to empty values. `_id` is accepted as an alias for `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    #[serde(alias = "_id")]
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub classification: String,
    pub types: Vec<String>,
    #[serde(default)]
    pub resistant: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub weight: Range,
    #[serde(default)]
    pub height: Range,
    #[serde(default)]
    pub flee_rate: f64,
    #[serde(default)]
    pub evolution_requirements: Option<EvolutionRequirements>,
    #[serde(default)]
    pub evolutions: Vec<Evolution>,
    #[serde(default, rename = "maxCP")]
    pub max_cp: i32,
    #[serde(default, rename = "maxHP")]
    pub max_hp: i32,
    #[serde(default)]
    pub attacks: Attacks,
}

impl Pokemon {
    /// Check an incoming entry before it is stored.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id < 1 {
            return Err(CoreError::Validation("id must be a positive integer".into()));
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".into()));
        }
        if self.types.is_empty() {
            return Err(CoreError::Validation(
                "types must contain at least one type".into(),
            ));
        }
        validate_types("types", self.types.iter().map(String::as_str))?;
        validate_types("resistant", self.resistant.iter().map(String::as_str))?;
        validate_types("weaknesses", self.weaknesses.iter().map(String::as_str))?;
        validate_types(
            "attacks",
            self.attacks
                .fast
                .iter()
                .chain(&self.attacks.special)
                .map(|a| a.attack_type.as_str()),
        )?;
        Ok(())
    }
}

/// Row shape of the `pokemons` table; nested values live in JSONB columns.
#[derive(Debug, FromRow)]
pub struct PokemonRow {
    pub id: DbId,
    pub name: String,
    pub classification: String,
    pub types: Vec<String>,
    pub resistant: Vec<String>,
    pub weaknesses: Vec<String>,
    pub weight: Json<Range>,
    pub height: Json<Range>,
    pub flee_rate: f64,
    pub evolution_requirements: Option<Json<EvolutionRequirements>>,
    pub evolutions: Json<Vec<Evolution>>,
    pub max_cp: i32,
    pub max_hp: i32,
    pub attacks: Json<Attacks>,
}

impl From<PokemonRow> for Pokemon {
    fn from(row: PokemonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            classification: row.classification,
            types: row.types,
            resistant: row.resistant,
            weaknesses: row.weaknesses,
            weight: row.weight.0,
            height: row.height.0,
            flee_rate: row.flee_rate,
            evolution_requirements: row.evolution_requirements.map(|r| r.0),
            evolutions: row.evolutions.0,
            max_cp: row.max_cp,
            max_hp: row.max_hp,
            attacks: row.attacks.0,
        }
    }
}
