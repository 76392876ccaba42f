//! Auth Middleware
//!
//! Middleware for requiring a resolved identity on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::ResolveIdentityUseCase;
use crate::application::config::AuthConfig;
use crate::application::resolve_identity::CurrentUser;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer identity
///
/// On success the resolved identity is stored in request extensions for
/// downstream handlers; every failure mode answers 401 with a bearer
/// challenge.
pub async fn require_identity<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = match extract_bearer(req.headers()) {
        Some(token) => token,
        None => return Err(AuthError::TokenInvalid.into_response()),
    };

    let use_case = ResolveIdentityUseCase::new(state.repo.clone(), state.config.clone());

    let current = match use_case.execute(&token).await {
        Ok(current) => current,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert::<CurrentUser>(current);

    Ok(next.run(req).await)
}
