//! Add Comment Use Case

use std::sync::Arc;

use auth::CurrentUser;

use crate::domain::entity::comment::Comment;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_id::PostId;
use crate::error::{BlogError, BlogResult};

/// Add comment input
pub struct AddCommentInput {
    pub post_id: PostId,
    pub content: String,
}

/// Add comment use case
pub struct AddCommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> AddCommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            post_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, input: AddCommentInput, user: &CurrentUser) -> BlogResult<Comment> {
        // Commenting requires the post to exist
        if self.post_repo.find_by_id(&input.post_id).await?.is_none() {
            return Err(BlogError::PostNotFound);
        }

        // author_id is the acting identity, whatever the client claims
        let comment = Comment::new(input.post_id, user.user_id.to_string(), input.content);
        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %comment.post_id,
            "Comment added"
        );

        Ok(comment)
    }
}
