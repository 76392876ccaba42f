//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::{POST_LIST_LIMIT, PostRepository};
use crate::error::BlogResult;

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> BlogResult<Vec<Post>> {
        self.repo.list(POST_LIST_LIMIT).await
    }
}
