//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::value_object::post_id::PostId;
use crate::error::BlogResult;

/// Hard cap on posts returned by a listing
pub const POST_LIST_LIMIT: i64 = 100;

/// Hard cap on comments returned per post
pub const COMMENT_LIST_LIMIT: i64 = 100;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> BlogResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>>;

    /// List posts in creation order, capped at `limit`
    async fn list(&self, limit: i64) -> BlogResult<Vec<Post>>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> BlogResult<()>;

    /// Delete a post (comments cascade)
    async fn delete(&self, post_id: &PostId) -> BlogResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> BlogResult<()>;

    /// List comments of one post in creation order, capped at `limit`
    async fn list_by_post(&self, post_id: &PostId, limit: i64) -> BlogResult<Vec<Comment>>;
}
