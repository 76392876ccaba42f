//! Resolve Identity Use Case
//!
//! Turns a bearer token into a verified current user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Resolved request identity
///
/// Carries no credential material, so it is safe to insert into request
/// extensions for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: UserName,
}

/// Resolve identity use case
pub struct ResolveIdentityUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ResolveIdentityUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Verify the token and load its subject from the store
    ///
    /// A vanished user invalidates the token even when the signature
    /// still checks out.
    pub async fn execute(&self, token: &str) -> AuthResult<CurrentUser> {
        let claims = token::verify_token(&self.config, token)?;

        let user_name =
            UserName::new(&claims.sub, None).map_err(|_| AuthError::TokenInvalid)?;

        let user = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        Ok(CurrentUser {
            user_id: user.user_id,
            user_name: user.user_name,
        })
    }
}
