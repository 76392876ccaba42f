//! Shared Kernel
//!
//! The smallest vocabulary every domain crate agrees on:
//! - the unified error type, its HTTP classification, and conversions
//! - typed UUID identifiers
//!
//! Anything here should be stable and mean the same thing in every
//! domain; feature-specific logic belongs in the domain crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
