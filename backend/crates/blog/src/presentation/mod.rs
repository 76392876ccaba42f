//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router for the Blog crate.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BlogAppState;
pub use router::{blog_router, blog_router_generic};
