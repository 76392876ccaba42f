//! API DTOs (Data Transfer Objects)
//!
//! Field names are the wire contract; everything stays snake_case.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub username: String,
    pub message: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request (urlencoded form body)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

// ============================================================================
// Current User
// ============================================================================

/// Current user response
///
/// Never carries credential material.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub id: String,
    pub username: String,
}
