//! User Password Value Object
//!
//! Two-state password model for the auth domain: [`RawPassword`] is
//! validated user input on its way to being hashed or verified,
//! [`UserPassword`] is the stored Argon2id hash. Crypto lives in
//! `platform::password`; this module translates its errors into
//! `AppError` values a handler can return directly.
//!
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("secret1".to_string())?;
//! let stored = UserPassword::from_raw(&raw, None)?;
//! assert!(stored.verify(&raw, None));
//! # Ok::<(), auth::AppError>(())
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// RawPassword
// ============================================================================

/// Validated plaintext input, zeroized on drop
///
/// Structural checks only: non-empty, bounded length, no control
/// characters. There is no minimum length or composition rule; any
/// passphrase the user can remember is acceptable.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate raw input
    ///
    /// Policy violations come back as 400-class `AppError`s with a hint
    /// the client can show as-is.
    pub fn new(raw: String) -> AppResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(policy_violation)
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

fn policy_violation(e: PasswordPolicyError) -> AppError {
    match e {
        PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
            "Password must be at most {max} characters (got {actual})"
        ))
        .with_action("Choose a shorter password"),
        PasswordPolicyError::EmptyOrWhitespace => AppError::bad_request("Password cannot be empty")
            .with_action("Enter a password"),
        PasswordPolicyError::InvalidCharacter => {
            AppError::bad_request("Password contains unsupported characters")
                .with_action("Remove control characters from the password")
        }
    }
}

// ============================================================================
// UserPassword
// ============================================================================

/// Stored password hash (Argon2id, PHC string form)
///
/// Safe to persist; Debug output never shows the hash value.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated password for storage
    ///
    /// The pepper, when configured, must be the same one later passed
    /// to [`verify`](Self::verify).
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        raw.inner().hash(pepper).map(Self).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {msg}"))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Password hashing produced an invalid hash")
            }
        })
    }

    /// Rehydrate from a stored PHC string
    ///
    /// A row that fails to parse is a data problem, not a caller
    /// problem, so this maps to a 500.
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AppError::internal("Invalid password hash in database"))
    }

    /// PHC string for persistence
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time check of a candidate password
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod validation {
        use super::*;

        #[test]
        fn test_accepts_any_printable_length_above_zero() {
            assert!(RawPassword::new("secret1".to_string()).is_ok());
            assert!(RawPassword::new("a".to_string()).is_ok());
        }

        #[test]
        fn test_rejects_empty_and_blank_as_bad_request() {
            for input in ["", "   "] {
                let err = RawPassword::new(input.to_string()).unwrap_err();
                assert_eq!(err.status_code(), 400);
                assert_eq!(err.message(), "Password cannot be empty");
            }
        }

        #[test]
        fn test_rejects_over_length_with_hint() {
            use platform::password::MAX_PASSWORD_LENGTH;

            let err = RawPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert!(err.message().contains("128"));
            assert!(err.action().is_some());
        }

        #[test]
        fn test_rejects_control_characters() {
            let err = RawPassword::new("pass\u{0007}word".to_string()).unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }

    mod hashing {
        use super::*;

        #[test]
        fn test_verify_roundtrip() {
            let raw = RawPassword::new("correct horse".to_string()).unwrap();
            let stored = UserPassword::from_raw(&raw, None).unwrap();

            assert!(stored.verify(&raw, None));

            let wrong = RawPassword::new("incorrect horse".to_string()).unwrap();
            assert!(!stored.verify(&wrong, None));
        }

        #[test]
        fn test_pepper_mismatch_fails_verification() {
            let raw = RawPassword::new("correct horse".to_string()).unwrap();
            let stored = UserPassword::from_raw(&raw, Some(b"pepper-a")).unwrap();

            assert!(stored.verify(&raw, Some(b"pepper-a")));
            assert!(!stored.verify(&raw, Some(b"pepper-b")));
            assert!(!stored.verify(&raw, None));
        }

        #[test]
        fn test_multibyte_passphrase() {
            let raw = RawPassword::new("最も！！安全なパスワード".to_string()).unwrap();
            let stored = UserPassword::from_raw(&raw, None).unwrap();
            assert!(stored.verify(&raw, None));
        }
    }

    mod persistence {
        use super::*;

        #[test]
        fn test_phc_string_survives_storage() {
            let raw = RawPassword::new("correct horse".to_string()).unwrap();
            let stored = UserPassword::from_raw(&raw, None).unwrap();

            let from_db = UserPassword::from_phc_string(stored.as_phc_string().to_string());
            assert!(from_db.unwrap().verify(&raw, None));
        }

        #[test]
        fn test_corrupt_row_maps_to_internal_error() {
            let err = UserPassword::from_phc_string("plaintext-leaked-into-column").unwrap_err();
            assert_eq!(err.status_code(), 500);
        }
    }

    mod redaction {
        use super::*;

        #[test]
        fn test_neither_form_debugs_its_secret() {
            let raw = RawPassword::new("TopSecret99".to_string()).unwrap();
            let out = format!("{:?}", raw);
            assert!(out.contains("REDACTED"));
            assert!(!out.contains("TopSecret99"));

            let stored = UserPassword::from_raw(&raw, None).unwrap();
            let out = format!("{:?}", stored);
            assert!(!out.contains("argon2id"));
        }
    }
}
