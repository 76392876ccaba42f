//! Infrastructure Layer
//!
//! Database implementations and test doubles.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAuthRepository;
pub use postgres::PgAuthRepository;
