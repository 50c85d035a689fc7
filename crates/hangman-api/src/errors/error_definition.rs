//! APIエラー定義

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// hangman クレートのエラー型をインポート
use hangman::errors::GameError;

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// リクエストボディが JSON として不正
  InvalidJson,
  /// 入力値が無効
  InvalidInput,
  /// ラウンドが開始されていない
  NoActiveRound,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidJson => "invalid_json",
      Self::InvalidInput => "invalid_input",
      Self::NoActiveRound => "no_active_round",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidJson | Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::NoActiveRound => StatusCode::CONFLICT,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// リクエストボディが JSON として不正
  #[error("invalid JSON body: {0}")]
  InvalidJson(String),

  /// 入力値が無効
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// ラウンドが開始されていない
  #[error("no active round")]
  NoActiveRound,

  /// 内部エラー
  #[error("internal error: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidJson(_) => ApiErrorKind::InvalidJson,
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::NoActiveRound => ApiErrorKind::NoActiveRound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
///
/// `{ "error": "no active round", "code": "no_active_round" }`
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  code: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: self.to_string(),
      code: self.code(),
    };

    (status, Json(body)).into_response()
  }
}

/// GameError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<GameError> for ApiError {
  fn from(err: GameError) -> Self {
    match err {
      GameError::NoActiveRound => ApiError::NoActiveRound,
      GameError::InvalidInput { reason } => ApiError::invalid_input(reason),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Json extractor の失敗（構文エラー、フィールド欠落、Content-Type 不一致）を変換
///
/// axum 既定の 415 / 422 を含め、すべて 400 として返す。
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::InvalidJson(rejection.body_text())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
