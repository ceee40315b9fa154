//! The closed set of Pokémon type tags.
//!
//! Catalog entries, attacks and the `types` query filter may only use these
//! names. Matching is case-sensitive, as stored in the catalog data.

use crate::error::CoreError;

pub const POKEMON_TYPES: &[&str] = &[
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

pub fn is_known_type(name: &str) -> bool {
    POKEMON_TYPES.contains(&name)
}

/// Reject the first unknown type tag in `names`.
///
/// `field` names the offending input in the error message.
pub fn validate_types<'a, I>(field: &str, names: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    match names.into_iter().find(|n| !is_known_type(n)) {
        Some(unknown) => Err(CoreError::Validation(format!(
            "{field} contains unknown Pokemon type '{unknown}'"
        ))),
        None => Ok(()),
    }
}
