//! リクエストモデル定義

use serde::Deserialize;

/// 1 文字推測リクエスト
#[derive(Debug, Deserialize)]
pub struct LetterGuessRequest {
  /// 推測する文字（ちょうど 1 文字）
  pub letter: String,
}

/// 単語推測リクエスト
#[derive(Debug, Deserialize)]
pub struct WordGuessRequest {
  /// 推測する単語
  pub word: String,
}
