//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::CurrentUser;

use crate::application::{
    AddCommentInput, AddCommentUseCase, CreatePostInput, CreatePostUseCase, DeletePostUseCase,
    GetPostUseCase, ListCommentsUseCase, ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_id::PostId;
use crate::error::BlogResult;
use crate::presentation::dto::{
    CommentRequest, CommentResponse, CreatePostRequest, PostResponse, UpdatePostRequest,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Posts
// ============================================================================

/// POST /blog/posts
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let post = use_case.execute(input, &current).await?;

    Ok(Json(post.into()))
}

/// GET /blog/posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let posts = use_case.execute().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /blog/posts/{post_id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());

    let post = use_case.execute(&PostId::from_uuid(post_id)).await?;

    Ok(Json(post.into()))
}

/// PUT /blog/posts/{post_id}
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let input = UpdatePostInput {
        post_id: PostId::from_uuid(post_id),
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let post = use_case.execute(input, &current).await?;

    Ok(Json(post.into()))
}

/// DELETE /blog/posts/{post_id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case
        .execute(&PostId::from_uuid(post_id), &current)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// POST /blog/posts/{post_id}/comments
pub async fn add_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> BlogResult<Json<CommentResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCommentUseCase::new(state.repo.clone(), state.repo.clone());

    let input = AddCommentInput {
        post_id: PostId::from_uuid(post_id),
        content: req.content,
    };

    let comment = use_case.execute(input, &current).await?;

    Ok(Json(comment.into()))
}

/// GET /blog/posts/{post_id}/comments
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<Vec<CommentResponse>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCommentsUseCase::new(state.repo.clone());

    let comments = use_case.execute(&PostId::from_uuid(post_id)).await?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
