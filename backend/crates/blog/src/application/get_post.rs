//! Get Post Use Case

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_id::PostId;
use crate::error::{BlogError, BlogResult};

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &PostId) -> BlogResult<Post> {
        self.repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }
}
