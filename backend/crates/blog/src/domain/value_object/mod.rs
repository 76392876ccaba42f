//! Value Object Module

pub mod comment_id;
pub mod post_id;
