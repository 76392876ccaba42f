//! Update Post Use Case

use std::sync::Arc;

use auth::CurrentUser;

use crate::domain::entity::post::Post;
use crate::domain::ownership;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_id::PostId;
use crate::error::{BlogError, BlogResult};

/// Update post input
pub struct UpdatePostInput {
    pub post_id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdatePostInput, user: &CurrentUser) -> BlogResult<Post> {
        // Existence first: a missing post is 404 for everyone
        let mut post = self
            .repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        ownership::authorize_mutation(&post.owner_id, &user.user_id.to_string(), "update")?;

        post.apply_update(input.title, input.content, input.author);
        self.repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, "Post updated");

        Ok(post)
    }
}
