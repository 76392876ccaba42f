//! Comment Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{comment_id::CommentId, post_id::PostId};

/// Comment entity
///
/// `author_id` always comes from the acting identity; a comment cannot
/// be attributed to anyone else.
#[derive(Debug, Clone)]
pub struct Comment {
    /// Internal UUID identifier
    pub comment_id: CommentId,
    /// Post this comment belongs to
    pub post_id: PostId,
    /// String form of the commenting user's id
    pub author_id: String,
    /// Comment body
    pub content: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on a post
    pub fn new(post_id: PostId, author_id: String, content: String) -> Self {
        Self {
            comment_id: CommentId::new(),
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}
