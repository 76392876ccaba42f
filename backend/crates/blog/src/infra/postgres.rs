//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::comment::Comment;
use crate::domain::entity::post::Post;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::{comment_id::CommentId, post_id::PostId};
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                content,
                author,
                owner_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.owner_id)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                author,
                owner_id,
                created_at,
                updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list(&self, limit: i64) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                author,
                owner_id,
                created_at,
                updated_at
            FROM posts
            ORDER BY created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2,
                content = $3,
                author = $4,
                updated_at = $5
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<()> {
        // Comments go with the post via ON DELETE CASCADE
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                author_id,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(&comment.author_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_post(&self, post_id: &PostId, limit: i64) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comment_id,
                post_id,
                author_id,
                content,
                created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at ASC
            LIMIT $2
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    content: String,
    author: String,
    owner_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            content: self.content,
            author: self.author,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    post_id: Uuid,
    author_id: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            post_id: PostId::from_uuid(self.post_id),
            author_id: self.author_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
