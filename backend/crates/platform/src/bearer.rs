//! Bearer Token Extraction
//!
//! Common `Authorization` header handling for token-authenticated endpoints.

use axum::http::{HeaderMap, header};

/// Authentication scheme expected in the Authorization header
const BEARER_SCHEME: &str = "Bearer ";

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, or does not
/// use the Bearer scheme. The scheme is matched case-insensitively
/// (RFC 9110); the token itself is returned as sent, surrounding
/// whitespace removed.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let scheme = value.get(..BEARER_SCHEME.len())?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = value[BEARER_SCHEME.len()..].trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
