//! Application Layer
//!
//! Use cases and application services.

pub mod add_comment;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_comments;
pub mod list_posts;
pub mod update_post;

// Re-exports
pub use add_comment::{AddCommentInput, AddCommentUseCase};
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use list_comments::ListCommentsUseCase;
pub use list_posts::ListPostsUseCase;
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
