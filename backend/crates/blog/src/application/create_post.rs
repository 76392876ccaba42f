//! Create Post Use Case

use std::sync::Arc;

use auth::CurrentUser;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePostInput, user: &CurrentUser) -> BlogResult<Post> {
        // owner_id comes from the verified identity, never the payload
        let post = Post::new(
            input.title,
            input.content,
            input.author,
            user.user_id.to_string(),
        );

        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            owner_id = %post.owner_id,
            "Post created"
        );

        Ok(post)
    }
}
