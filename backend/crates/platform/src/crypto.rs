//! Cryptographic Utilities
//!
//! OS-sourced randomness and the standard base64 alphabet, shared by
//! secret generation and the env-var decoding at startup.

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Fill a fresh buffer from the OS CSPRNG
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Standard-alphabet base64, padded
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard-alphabet base64
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}
