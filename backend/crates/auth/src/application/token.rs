//! Bearer Token Signing and Verification
//!
//! Self-contained tokens in the compact `header.payload.signature`
//! layout: each segment is base64url without padding, and the signature
//! is HMAC-SHA256 over the first two segments. Verification is purely
//! local, so tokens stay valid across process restarts as long as the
//! signing secret is stable.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Only algorithm this module signs with or accepts
const TOKEN_ALGORITHM: &str = "HS256";

/// Token type marker in the header
const TOKEN_TYPE: &str = "JWT";

/// Token header
///
/// Serialized field order is part of the signing input, so `alg` stays
/// first.
#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

impl Header {
    fn hs256() -> Self {
        Self {
            alg: TOKEN_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: canonical user name
    pub sub: String,
    /// User UUID in string form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Absolute expiry, unix seconds
    pub exp: i64,
}

/// Issue a signed token for a user
///
/// `ttl` falls back to `config.token_ttl` when not given.
pub fn issue_token(config: &AuthConfig, user: &User, ttl: Option<Duration>) -> AuthResult<String> {
    let ttl = ttl.unwrap_or(config.token_ttl);

    let claims = Claims {
        sub: user.user_name.canonical().to_string(),
        user_id: Some(user.user_id.to_string()),
        exp: Utc::now().timestamp() + ttl.as_secs() as i64,
    };

    sign_claims(config, &claims)
}

/// Serialize and sign claims into a compact token
pub(crate) fn sign_claims(config: &AuthConfig, claims: &Claims) -> AuthResult<String> {
    let header_json = serde_json::to_vec(&Header::hs256())
        .map_err(|e| AuthError::Internal(format!("Token header serialization failed: {e}")))?;
    let claims_json = serde_json::to_vec(claims)
        .map_err(|e| AuthError::Internal(format!("Token claims serialization failed: {e}")))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(&header_json),
        URL_SAFE_NO_PAD.encode(&claims_json)
    );

    let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(signing_input.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a token and return its claims
///
/// Checks structure (exactly three segments), signature, the pinned
/// algorithm, and expiry. Every failure collapses to
/// `AuthError::TokenInvalid` so the caller cannot probe which check
/// tripped.
pub fn verify_token(config: &AuthConfig, token: &str) -> AuthResult<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::TokenInvalid);
    }
    let (header_b64, claims_b64, signature_b64) = (parts[0], parts[1], parts[2]);

    // Signature covers the first two segments verbatim
    let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(claims_b64.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::TokenInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::TokenInvalid)?;

    // Decode header, pin the algorithm
    let header_json = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|_| AuthError::TokenInvalid)?;
    let header: Header =
        serde_json::from_slice(&header_json).map_err(|_| AuthError::TokenInvalid)?;
    if header.alg != TOKEN_ALGORITHM {
        return Err(AuthError::TokenInvalid);
    }

    // Decode claims, reject expired tokens
    let claims_json = URL_SAFE_NO_PAD
        .decode(claims_b64)
        .map_err(|_| AuthError::TokenInvalid)?;
    let claims: Claims =
        serde_json::from_slice(&claims_json).map_err(|_| AuthError::TokenInvalid)?;

    if claims.exp < Utc::now().timestamp() {
        return Err(AuthError::TokenInvalid);
    }

    Ok(claims)
}
