//! In-Memory Repository Implementation
//!
//! RwLock-guarded map with the same uniqueness semantics as the
//! Postgres implementation. Backs tests and local development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// In-memory user repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());

        // Same guard the unique index provides in Postgres
        if users
            .values()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(AuthError::DuplicateUsername);
        }

        users.insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users
            .values()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users
            .values()
            .any(|u| u.user_name.canonical() == user_name.canonical()))
    }
}
