//! Password Hashing and Verification
//!
//! Argon2id with a per-hash random salt, PHC-string storage, and an
//! optional application-wide pepper appended before hashing. Plaintext
//! lives in a zeroize-on-drop wrapper and never appears in Debug output.
//!
//! Length floors and strength heuristics are account-level policy and
//! belong to the domain crates; this module enforces structural validity
//! only (non-empty, bounded length, no control characters).

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Upper bound on password length in chars (NIST 800-63B asks for >= 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Structural rejection of a candidate password
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password exceeds {max} characters ({actual} given)")]
    TooLong { max: usize, actual: usize },

    #[error("password is empty or whitespace only")]
    EmptyOrWhitespace,

    #[error("password contains control characters")]
    InvalidCharacter,
}

/// Failure while hashing or parsing a stored hash
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),

    #[error("stored value is not a PHC string")]
    InvalidHashFormat,
}

// ============================================================================
// ClearTextPassword
// ============================================================================

/// Plaintext password, erased from memory on drop
///
/// Deliberately not `Clone`; the only way out of this type is through
/// [`hash`](Self::hash) or verification. Debug prints `[REDACTED]`.
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery staple".to_string())?;
/// let stored = password.hash(None)?;
/// assert!(stored.verify(&password, None));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize (NFKC) and structurally validate raw input
    ///
    /// Counting happens per Unicode scalar, not per byte, so multibyte
    /// passphrases get the full length allowance.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Space, tab and newline may appear inside a passphrase; other
        // control characters are rejected
        if normalized
            .chars()
            .any(|ch| ch.is_control() && !matches!(ch, ' ' | '\t' | '\n'))
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Bypass validation; test seeding only
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Produce an Argon2id hash with a fresh random salt
    ///
    /// When a pepper is supplied it is appended to the password bytes
    /// before hashing; verification must then supply the same pepper.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let keyed = peppered(self.as_bytes(), pepper);
        let salt = SaltString::generate(OsRng);

        // Argon2::default() is the current OWASP profile:
        // Argon2id, m=19456 KiB, t=2, p=1
        let phc = Argon2::default()
            .hash_password(&keyed, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
            .to_string();

        Ok(HashedPassword { phc })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Append the pepper, if any, to the password bytes
fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut bytes = password.to_vec();
    if let Some(p) = pepper {
        bytes.extend_from_slice(p);
    }
    bytes
}

// ============================================================================
// HashedPassword
// ============================================================================

/// Argon2id hash in PHC string form, safe to persist and to clone
///
/// The PHC string carries algorithm, version, parameters and salt, so a
/// row hashed under older parameters still verifies after the defaults
/// move on.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    phc: String,
}

impl HashedPassword {
    /// Parse a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = s.into();
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { phc })
    }

    /// The PHC string, for persistence
    pub fn as_phc_string(&self) -> &str {
        &self.phc
    }

    /// Check a candidate password against this hash
    ///
    /// The comparison inside the argon2 crate is constant-time. Any
    /// parse failure of the stored hash reads as a mismatch.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let parsed = match PasswordHash::new(&self.phc) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let keyed = peppered(password.as_bytes(), pepper);
        Argon2::default().verify_password(&keyed, &parsed).is_ok()
    }

    /// Whether this hash should be regenerated on next successful login
    ///
    /// True for anything that is not Argon2id. Existing hashes keep
    /// verifying either way; migration timing is the caller's call.
    pub fn needs_rehash(&self) -> bool {
        match PasswordHash::new(&self.phc) {
            Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("phc", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
