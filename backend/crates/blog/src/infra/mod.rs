//! Infrastructure Layer
//!
//! Repository implementations for the Blog crate.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBlogRepository;
pub use postgres::PgBlogRepository;
