//! HTTP Handlers

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::{Form, Json};
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, ResolveIdentityUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, RegisterRequest, RegisterResponse, TokenResponse, UserInfoResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            username: output.username,
            message: "User registered successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
///
/// Credentials arrive as a urlencoded form body (OAuth2 password flow
/// convention), not JSON.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(req): Form<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.access_token,
    }))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /auth/users/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserInfoResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers).ok_or(AuthError::TokenInvalid)?;

    let use_case = ResolveIdentityUseCase::new(state.repo.clone(), state.config.clone());
    let current = use_case.execute(&token).await?;

    Ok(Json(UserInfoResponse {
        id: current.user_id.to_string(),
        username: current.user_name.original().to_string(),
    }))
}
