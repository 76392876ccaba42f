//! Domain Layer
//!
//! Contains entities, value objects, ownership rules, and repository
//! traits.

pub mod entity;
pub mod ownership;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{comment::Comment, post::Post};
pub use repository::{CommentRepository, PostRepository};
