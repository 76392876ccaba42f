//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already registered
    #[error("Username already registered")]
    DuplicateUsername,

    /// Invalid credentials (unknown user or wrong password, deliberately
    /// indistinguishable)
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, tampered, expired, or pointing
    /// at a user that no longer exists
    #[error("Could not validate credentials")]
    TokenInvalid,

    /// User name rejected by validation
    #[error("Invalid username: {0}")]
    InvalidUserName(String),

    /// Password rejected by validation
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::DuplicateUsername
            | AuthError::InvalidUserName(_)
            | AuthError::InvalidPassword(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(e) => match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateUsername
            | AuthError::InvalidUserName(_)
            | AuthError::InvalidPassword(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Database(e) => match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::debug!("Bearer token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
