//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, ownership rules, repository traits
//! - `application/` - Use cases (one per operation)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Post create/list/get/update/delete
//! - Comments per post
//! - Ownership-gated mutations (only the creator may update or delete)
//!
//! ## Authorization Model
//! - Reads are public; every mutation requires a resolved bearer identity
//! - `owner_id`/`author_id` are assigned from the acting identity at
//!   creation and never accepted from request payloads
//! - Missing resources answer 404 before the ownership check runs, so
//!   probing cannot distinguish "absent" from "not yours" by the 403

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::blog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryBlogRepository;
    pub use crate::infra::postgres::PgBlogRepository as BlogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
