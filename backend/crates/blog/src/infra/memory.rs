//! In-Memory Repository Implementation
//!
//! RwLock-guarded maps with the same ordering and cascade semantics as
//! the Postgres implementation. Backs tests and local development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::entity::comment::Comment;
use crate::domain::entity::post::Post;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_id::PostId;
use crate::error::BlogResult;

/// In-memory blog repository
#[derive(Clone, Default)]
pub struct InMemoryBlogRepository {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        let mut posts = self.posts.write().unwrap_or_else(|e| e.into_inner());
        posts.insert(post.post_id.into_uuid(), post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>> {
        let posts = self.posts.read().unwrap_or_else(|e| e.into_inner());
        Ok(posts.get(post_id.as_uuid()).cloned())
    }

    async fn list(&self, limit: i64) -> BlogResult<Vec<Post>> {
        let posts = self.posts.read().unwrap_or_else(|e| e.into_inner());

        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        all.truncate(limit.max(0) as usize);

        Ok(all)
    }

    async fn update(&self, post: &Post) -> BlogResult<()> {
        let mut posts = self.posts.write().unwrap_or_else(|e| e.into_inner());
        posts.insert(post.post_id.into_uuid(), post.clone());
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<()> {
        let mut posts = self.posts.write().unwrap_or_else(|e| e.into_inner());
        posts.remove(post_id.as_uuid());

        // Cascade, matching the foreign key in Postgres
        let mut comments = self.comments.write().unwrap_or_else(|e| e.into_inner());
        comments.retain(|_, c| c.post_id != *post_id);

        Ok(())
    }
}

impl CommentRepository for InMemoryBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        let mut comments = self.comments.write().unwrap_or_else(|e| e.into_inner());
        comments.insert(comment.comment_id.into_uuid(), comment.clone());
        Ok(())
    }

    async fn list_by_post(&self, post_id: &PostId, limit: i64) -> BlogResult<Vec<Comment>> {
        let comments = self.comments.read().unwrap_or_else(|e| e.into_inner());

        let mut matching: Vec<Comment> = comments
            .values()
            .filter(|c| c.post_id == *post_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        matching.truncate(limit.max(0) as usize);

        Ok(matching)
    }
}
