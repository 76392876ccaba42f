//! Post Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::post_id::PostId;

/// Post entity
///
/// `author` is a display string supplied by the client; `owner_id` is
/// the authoritative identity reference. The two are independent:
/// authorization only ever consults `owner_id`, and `owner_id` is never
/// serialized into API responses.
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Author display name (client-supplied, not verified)
    pub author: String,
    /// String form of the creating user's id, assigned once
    pub owner_id: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by the given identity
    pub fn new(title: String, content: String, author: String, owner_id: String) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            title,
            content,
            author,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update payload
    ///
    /// `owner_id` and `created_at` are immutable; only the content
    /// fields and `updated_at` change.
    pub fn apply_update(&mut self, title: String, content: String, author: String) {
        self.title = title;
        self.content = content;
        self.author = author;
        self.updated_at = Utc::now();
    }
}
