//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー分類
///
/// アプリ内のエラーを HTTP ステータス相当の語彙で分類する。
/// レスポンス生成はこの分類だけを見ればよく、個別のエラー型を
/// 知る必要はない。`non_exhaustive` なので分類は後から増やせる。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - リクエスト自体が不正
    BadRequest,
    /// 401 - 認証されていない、または資格情報が検証できない
    Unauthorized,
    /// 403 - 認証済みだが操作する権限がない
    Forbidden,
    /// 404 - 対象リソースが存在しない
    NotFound,
    /// 408 - リクエストタイムアウト
    RequestTimeout,
    /// 409 - 既存の状態と衝突（重複登録など）
    Conflict,
    /// 422 - 形式は正しいが意味的に処理できない
    UnprocessableEntity,
    /// 500 - サーバー内部の不具合
    InternalServerError,
    /// 503 - 一時的に応答できない（接続枯渇など）
    ServiceUnavailable,
}

impl ErrorKind {
    /// 対応する HTTP ステータスコード
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// ステータスの標準 reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx かどうか。真ならログに残すべきエラー
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx かどうか
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
