//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{
  GREETING_MESSAGE, GreetingResponse, GuessResponse, LetterGuessRequest, StartResponse,
  WordGuessRequest,
};

use super::extract::AppJson;
use super::state::AppState;

/// GET /start (/word) エンドポイント
///
/// 新しいラウンドを開始する。進行中のラウンドは破棄される。
///
/// # Response
/// - 200 OK: `{ "word_length": 7 }`（デバッグ設定時は `word` も含む）
pub async fn get_start(State(state): State<AppState>) -> Result<Json<StartResponse>, ApiError> {
  let response = state.service.start_round()?;

  info!(word_length = response.word_length, "ラウンドを開始しました");

  Ok(Json(response))
}

/// POST /guess/letter エンドポイント
///
/// 1 文字を推測する。
///
/// # Request Body
/// ```json
/// { "letter": "e" }
/// ```
///
/// # Response
/// - 200 OK: 推測結果（進行中 / 勝利 / 敗北）
/// - 400 Bad Request: 入力エラー（不正な JSON、空文字、複数文字）
/// - 409 Conflict: ラウンド未開始
///
/// セッション操作はメモリ上の短い処理のため spawn_blocking は使わない。
pub async fn post_guess_letter(
  State(state): State<AppState>,
  AppJson(request): AppJson<LetterGuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
  debug!(letter = %request.letter, "文字の推測リクエストを受信");

  let response = state.service.guess_letter(request)?;

  Ok(Json(response))
}

/// POST /guess/word エンドポイント
///
/// 単語全体を推測する。レスポンス形式は `/guess/letter` と同じ。
///
/// # Request Body
/// ```json
/// { "word": "example" }
/// ```
pub async fn post_guess_word(
  State(state): State<AppState>,
  AppJson(request): AppJson<WordGuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
  debug!(word_len = request.word.chars().count(), "単語の推測リクエストを受信");

  let response = state.service.guess_word(request)?;

  Ok(Json(response))
}

/// GET / エンドポイント
pub async fn root_greeting() -> Json<GreetingResponse> {
  Json(GreetingResponse {
    message: GREETING_MESSAGE,
  })
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
