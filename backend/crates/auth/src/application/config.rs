//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret for HMAC-SHA256 (32 bytes)
    pub token_secret: [u8; 32],
    /// Default token TTL (15 minutes)
    pub token_ttl: Duration,
    /// Token TTL for logins (30 minutes)
    pub login_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(15 * 60),       // 15 minutes
            login_token_ttl: Duration::from_secs(30 * 60), // 30 minutes
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (per-process random secret;
    /// restarting invalidates all outstanding tokens)
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get default token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get login token TTL in seconds
    pub fn login_token_ttl_secs(&self) -> i64 {
        self.login_token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
