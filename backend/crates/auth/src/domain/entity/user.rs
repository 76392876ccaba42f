//! User Entity
//!
//! Account record: identity plus credential hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
///
/// The password hash travels with the entity so use cases can verify
/// credentials without a second lookup. It never appears in API
/// responses; DTOs carry only id and name.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique by canonical form, for login and display)
    pub user_name: UserName,
    /// Argon2id password hash (PHC string)
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
