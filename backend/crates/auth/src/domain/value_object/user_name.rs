//! User Name Value Object
//!
//! ユーザー名は登録・ログイン・所有権の照合に使う公開ハンドル。
//! 入力は NFKC 正規化 → trim → 検証 の順で処理し、表示用の
//! `original` と一意性判定用の小文字 `canonical` を両方保持する。
//!
//! ## 不変条件
//! - 正規化後 3〜30 文字
//! - 使用可能文字: a-z 0-9 `_` `.` `-` `+`（大文字入力は受理して小文字化）
//! - 先頭と末尾は英数字か `_`
//! - `..` を含まない、英数字を最低 1 文字含む
//! - 予約語と衝突しない

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum user name length, counted in chars after normalization
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum user name length, counted in chars after normalization
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Handles that collide with routes, roles, or common spoof targets.
/// Compared against the canonical (lowercase) form.
const RESERVED_HANDLES: &[&str] = &[
    // Routing segments of this API
    "auth",
    "blog",
    "register",
    "login",
    "logout",
    "token",
    "users",
    "user",
    "me",
    "posts",
    "post",
    "comments",
    "comment",
    "api",
    // Operational roles
    "admin",
    "administrator",
    "root",
    "system",
    "moderator",
    "staff",
    "support",
    "superuser",
    // Infrastructure names
    "www",
    "mail",
    "email",
    "ftp",
    "ssh",
    "webhook",
    "oauth",
    // Placeholder-ish values that confuse logs and listings
    "test",
    "demo",
    "example",
    "guest",
    "anonymous",
    "null",
    "undefined",
    "none",
    "self",
    "new",
    "edit",
    "delete",
    "search",
    // Spoof protection
    "official",
    "verified",
    "bot",
    "service",
];

// ============================================================================
// Error Types
// ============================================================================

/// Why a candidate user name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Nothing left after normalization
    Empty,
    /// Below [`USER_NAME_MIN_LENGTH`]
    TooShort { length: usize, min: usize },
    /// Above [`USER_NAME_MAX_LENGTH`]
    TooLong { length: usize, max: usize },
    /// Character outside the allowed set (whitespace included)
    InvalidCharacter { ch: char, position: usize },
    /// First character must be alphanumeric or `_`
    InvalidStart { ch: char },
    /// Last character must be alphanumeric or `_`
    InvalidEnd { ch: char },
    /// Contains `..`
    ConsecutiveDots,
    /// Symbols only, no letter or digit anywhere
    NoAlphanumeric,
    /// Collides with a reserved handle
    Reserved { word: String },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user name must not be empty"),
            Self::TooShort { length, min } => {
                write!(f, "user name has {length} chars, needs at least {min}")
            }
            Self::TooLong { length, max } => {
                write!(f, "user name has {length} chars, allows at most {max}")
            }
            Self::InvalidCharacter { ch, position } => {
                write!(
                    f,
                    "character '{ch}' at position {position} is not allowed (use a-z, 0-9, _, ., -, +)"
                )
            }
            Self::InvalidStart { ch } => {
                write!(f, "user name may not begin with '{ch}'")
            }
            Self::InvalidEnd { ch } => {
                write!(f, "user name may not end with '{ch}'")
            }
            Self::ConsecutiveDots => write!(f, "user name may not contain '..'"),
            Self::NoAlphanumeric => {
                write!(f, "user name needs at least one letter or digit")
            }
            Self::Reserved { word } => write!(f, "'{word}' is reserved"),
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName
// ============================================================================

/// Validated public handle, stored in two forms
///
/// `original` keeps the caller's casing for display; `canonical` is the
/// lowercase form every uniqueness check and token subject uses. Two
/// names that differ only in case are the same user.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Validate raw input into a `UserName`
    ///
    /// Pass `None` to use the built-in reserved list, or `Some` to
    /// substitute a deployment-specific one.
    pub fn new(
        input: impl AsRef<str>,
        reserved: Option<&[&str]>,
    ) -> Result<Self, UserNameError> {
        let original = normalize(input.as_ref());
        let canonical = original.to_lowercase();
        validate(&canonical, reserved.unwrap_or(RESERVED_HANDLES))?;
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rehydrate from a stored value without re-running reserved checks
    ///
    /// Rows were validated on the way in; this only rebuilds the
    /// canonical form so reads stay cheap and an old row cannot be
    /// locked out by a later, stricter reserved list.
    pub fn from_db(original: &str) -> Result<Self, UserNameError> {
        if original.is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        })
    }

    /// Display form, caller's casing preserved
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for uniqueness and token subjects
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Alias for [`canonical`](Self::canonical)
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

/// NFKC then trim, casing untouched
fn normalize(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_string()
}

fn validate(canonical: &str, reserved: &[&str]) -> Result<(), UserNameError> {
    if canonical.is_empty() {
        return Err(UserNameError::Empty);
    }

    let length = canonical.chars().count();
    if length < USER_NAME_MIN_LENGTH {
        return Err(UserNameError::TooShort {
            length,
            min: USER_NAME_MIN_LENGTH,
        });
    }
    if length > USER_NAME_MAX_LENGTH {
        return Err(UserNameError::TooLong {
            length,
            max: USER_NAME_MAX_LENGTH,
        });
    }

    for (position, ch) in canonical.chars().enumerate() {
        if !is_name_char(ch) {
            return Err(UserNameError::InvalidCharacter { ch, position });
        }
    }

    // Unwraps are safe: the empty case returned above
    let first = canonical.chars().next().unwrap();
    if !is_edge_char(first) {
        return Err(UserNameError::InvalidStart { ch: first });
    }
    let last = canonical.chars().next_back().unwrap();
    if !is_edge_char(last) {
        return Err(UserNameError::InvalidEnd { ch: last });
    }

    if canonical.contains("..") {
        return Err(UserNameError::ConsecutiveDots);
    }

    if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(UserNameError::NoAlphanumeric);
    }

    if reserved.contains(&canonical) {
        return Err(UserNameError::Reserved {
            word: canonical.to_string(),
        });
    }

    Ok(())
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-' | '+')
}

#[inline]
fn is_edge_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value, None)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

// ============================================================================
// Tests
// ============================================================================
