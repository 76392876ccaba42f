//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// API 全体で共有するエラー型
///
/// [`ErrorKind`] で HTTP ステータスへ写像される分類を持ち、
/// 利用者に見せる `message`、任意の対処ヒント `action`、
/// デバッグ用の元エラー `source` を保持する。
/// メッセージは `Cow<'static, str>` なので固定文言ならアロケーションしない。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::not_found("Post not found");
/// assert_eq!(err.status_code(), 404);
///
/// let err = AppError::bad_request("Invalid username format")
///     .with_action("Use lowercase letters, digits and . _ - +");
/// assert!(err.action().is_some());
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>` の別名
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn parse_limit(raw: &str) -> AppResult<i64> {
///     raw.parse()
///         .map_err(|_| AppError::bad_request("limit must be an integer"))
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 分類とメッセージを指定してエラーを作る
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 400 として応答されるエラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 401 として応答されるエラー
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// 403 として応答されるエラー
    #[inline]
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// 404 として応答されるエラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 409 として応答されるエラー
    #[inline]
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// 500 として応答されるエラー
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 503 として応答されるエラー
    #[inline]
    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 利用者向けの対処ヒントを付ける
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元になったエラーを保持する（レスポンスには出ない）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー分類
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 対応する HTTP ステータスコード
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// 利用者向けメッセージ
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 対処ヒント（あれば）
    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_kind_and_message() {
        let err = AppError::new(ErrorKind::NotFound, "Post not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Post not found");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_constructor_status_table() {
        let table: Vec<(AppError, u16)> = vec![
            (AppError::bad_request("x"), 400),
            (AppError::unauthorized("x"), 401),
            (AppError::forbidden("x"), 403),
            (AppError::not_found("x"), 404),
            (AppError::conflict("x"), 409),
            (AppError::internal("x"), 500),
            (AppError::service_unavailable("x"), 503),
        ];
        for (err, status) in table {
            assert_eq!(err.status_code(), status, "{:?}", err.kind());
        }
    }

    #[test]
    fn test_builder_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err = AppError::internal("Startup failed")
            .with_action("Check the data directory exists")
            .with_source(io_err);

        assert_eq!(err.action(), Some("Check the data directory exists"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_format() {
        let err = AppError::not_found("Post not found");
        assert_eq!(err.to_string(), "[Not Found] Post not found");

        let err = AppError::bad_request("Invalid username").with_action("Pick another name");
        assert_eq!(
            err.to_string(),
            "[Bad Request] Invalid username (Action: Pick another name)"
        );
    }

    #[test]
    fn test_debug_shows_optional_fields_only_when_set() {
        let bare = format!("{:?}", AppError::not_found("x"));
        assert!(!bare.contains("action"));
        assert!(!bare.contains("source"));

        let full = format!("{:?}", AppError::not_found("x").with_action("y"));
        assert!(full.contains("action"));
    }

    #[test]
    fn test_owned_and_static_messages() {
        // Cow accepts both without a separate constructor
        let from_static = AppError::bad_request("fixed");
        let from_owned = AppError::bad_request(format!("post {} missing", 7));
        assert_eq!(from_static.message(), "fixed");
        assert_eq!(from_owned.message(), "post 7 missing");
    }
}
