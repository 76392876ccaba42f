//! Delete Post Use Case

use std::sync::Arc;

use auth::CurrentUser;

use crate::domain::ownership;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_id::PostId;
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &PostId, user: &CurrentUser) -> BlogResult<()> {
        // Same check order as update: 404 before the ownership guard
        let post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        ownership::authorize_mutation(&post.owner_id, &user.user_id.to_string(), "delete")?;

        self.repo.delete(post_id).await?;

        tracing::info!(post_id = %post.post_id, "Post deleted");

        Ok(())
    }
}
