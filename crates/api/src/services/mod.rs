//! Request-independent operations behind the HTTP handlers.
//!
//! Services borrow the store from [`AppState`](crate::state::AppState) and
//! never see transport types: handlers parse requests first, then call in.

pub mod catalog;
pub mod favorites;
pub mod ingestion;
pub mod users;
