//! API DTOs (Data Transfer Objects)
//!
//! `owner_id` never appears in any response shape; ownership is
//! enforced server-side and not advertised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{comment::Comment, post::Post};

// ============================================================================
// Posts
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Update post request
///
/// Same shape as create; `owner_id` is not accepted here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

/// Create comment request
///
/// Carries only the body; the author is the acting identity.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.comment_id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}
