//! Bearer credential parsing.
//!
//! Protected endpoints expect `Authorization: Bearer <username>:<secret>`.
//! This module only splits and shape-checks the header value; verifying the
//! pair against stored users happens in the API layer.

use crate::error::CoreError;

/// Literal scheme prefix, including the separating space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Separator between username and secret inside the token.
pub const CREDENTIAL_SEPARATOR: char = ':';

/// A username/secret pair extracted from a bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerCredentials {
    pub username: String,
    pub secret: String,
}

// Keep the secret out of logs.
impl std::fmt::Debug for BearerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerCredentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Parse a raw `Authorization` header value into credentials.
///
/// Fails with [`CoreError::Unauthorized`] when:
/// - the header is absent or does not start with `"Bearer "` (case-sensitive),
/// - the trimmed remainder does not contain exactly one `:`,
/// - either side of the `:` is empty.
pub fn parse_bearer(header: Option<&str>) -> Result<BearerCredentials, CoreError> {
    let token = header
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| CoreError::Unauthorized("Missing or invalid Bearer token".into()))?
        .trim();

    let mut parts = token.split(CREDENTIAL_SEPARATOR);
    let (username, secret) = match (parts.next(), parts.next(), parts.next()) {
        (Some(u), Some(s), None) if !u.is_empty() && !s.is_empty() => (u, s),
        _ => {
            return Err(CoreError::Unauthorized(
                "Invalid credentials format. Use \"Bearer username:password\"".into(),
            ))
        }
    };

    Ok(BearerCredentials {
        username: username.to_string(),
        secret: secret.to_string(),
    })
}

/// Whether a value can appear on either side of a bearer token.
///
/// Used when registering users: a username or secret containing the
/// separator (or nothing at all) could never authenticate.
pub fn is_token_safe(value: &str) -> bool {
    !value.is_empty() && !value.contains(CREDENTIAL_SEPARATOR) && value.trim() == value
}
