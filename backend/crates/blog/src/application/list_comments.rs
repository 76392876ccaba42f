//! List Comments Use Case

use std::sync::Arc;

use crate::domain::entity::comment::Comment;
use crate::domain::repository::{COMMENT_LIST_LIMIT, CommentRepository};
use crate::domain::value_object::post_id::PostId;
use crate::error::BlogResult;

/// List comments use case
///
/// No existence check: an unknown post yields an empty list.
pub struct ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    repo: Arc<C>,
}

impl<C> ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &PostId) -> BlogResult<Vec<Comment>> {
        self.repo.list_by_post(post_id, COMMENT_LIST_LIMIT).await
    }
}
