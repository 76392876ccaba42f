//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id, zeroized plaintext)
//! - Bearer token extraction from HTTP headers

pub mod bearer;
pub mod crypto;
pub mod password;
