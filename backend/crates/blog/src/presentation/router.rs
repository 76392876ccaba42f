//! Blog Router
//!
//! Reads are public; mutations sit behind the identity middleware. The
//! two route sets are built separately and merged, so the same path can
//! be public for GET and protected for POST/PUT/DELETE.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, require_identity};
use auth::{AuthConfig, PgAuthRepository};
use auth::domain::repository::UserRepository;

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repositories
pub fn blog_router(
    repo: PgBlogRepository,
    auth_repo: PgAuthRepository,
    auth_config: AuthConfig,
) -> Router {
    blog_router_generic(repo, auth_repo, auth_config)
}

/// Create a generic Blog router for any repository implementations
pub fn blog_router_generic<R, U>(repo: R, auth_repo: U, auth_config: AuthConfig) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };
    let auth_state = AuthMiddlewareState {
        repo: Arc::new(auth_repo),
        config: Arc::new(auth_config),
    };

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{post_id}", get(handlers::get_post::<R>))
        .route(
            "/posts/{post_id}/comments",
            get(handlers::list_comments::<R>),
        )
        .with_state(state.clone());

    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route(
            "/posts/{post_id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route(
            "/posts/{post_id}/comments",
            post(handlers::add_comment::<R>),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            require_identity::<U>,
        ))
        .with_state(state);

    public.merge(protected)
}
