//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod resolve_identity;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resolve_identity::{CurrentUser, ResolveIdentityUseCase};
pub use token::{Claims, issue_token, verify_token};
