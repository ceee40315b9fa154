//! Request extractors that guard protected routes.
//!
//! - [`auth::AuthUser`] -- Access Guard: resolves `Bearer username:secret`
//!   credentials to an authenticated identity.

pub mod auth;
