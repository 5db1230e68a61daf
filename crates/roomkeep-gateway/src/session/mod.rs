//! Session provider.
//!
//! Resolves an opaque bearer token to a `Session` (user id + role). The
//! gateway only reads sessions; issuing them belongs to the login flow, which
//! here is replaced by tokens seeded from config.

pub mod store;

use axum::http::{header::AUTHORIZATION, HeaderMap};

pub use store::{InMemorySessionStore, SessionStore};

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
