//! Domain logic for the Pokédex catalog service.
//!
//! Everything in here is pure: no I/O, no async, no database types. The
//! `db` and `api` crates build on these primitives.

pub mod catalog;
pub mod credentials;
pub mod error;
pub mod favorites;
pub mod pokemon_types;
pub mod types;
