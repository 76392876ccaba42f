//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: String,
    pub username: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate user name
        let user_name = UserName::new(input.username, None)
            .map_err(|e| AuthError::InvalidUserName(e.to_string()))?;

        // Friendly pre-check; the unique index stays the real guard
        if self.repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::DuplicateUsername);
        }

        // Validate and hash password before touching the store
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::InvalidPassword(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create and persist
        let user = User::new(user_name, password_hash);
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
            username: user.user_name.original().to_string(),
        })
    }
}
