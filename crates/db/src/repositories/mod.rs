//! PostgreSQL repositories. Each is a unit struct with associated async
//! functions taking the pool explicitly.

mod pokemon_repo;
mod user_repo;

pub use pokemon_repo::{like_contains_pattern, PokemonRepo};
pub use user_repo::UserRepo;
