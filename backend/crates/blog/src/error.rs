//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Post does not exist
    #[error("Post not found")]
    PostNotFound,

    /// Acting user does not own the post; the argument is the attempted
    /// verb ("update" or "delete")
    #[error("Not authorized to {0} this post")]
    NotOwner(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::PostNotFound => StatusCode::NOT_FOUND,
            BlogError::NotOwner(_) => StatusCode::FORBIDDEN,
            BlogError::Database(e) => match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::NotOwner(_) => ErrorKind::Forbidden,
            BlogError::Database(e) => match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
                _ => ErrorKind::InternalServerError,
            },
            BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::NotOwner(action) => {
                tracing::warn!(action = %action, "Rejected mutation by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        BlogError::Internal(err.to_string())
    }
}
