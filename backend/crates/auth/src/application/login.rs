//! Login Use Case
//!
//! Authenticates a user and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub access_token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A name that fails validation cannot match a stored user;
        // report it exactly like a miss
        let user_name =
            UserName::new(&input.username, None).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Structurally invalid passwords get the same answer as wrong ones
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token =
            token::issue_token(&self.config, &user, Some(self.config.login_token_ttl))?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User logged in"
        );

        Ok(LoginOutput { access_token })
    }
}
