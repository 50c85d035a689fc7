//! エラー定義

use thiserror::Error;

/// ゲーム操作のエラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `GameResult<T>` = `Result<T, GameError>` として使用する
///
/// どのエラーもセッションの状態を変更する前に返される。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
  /// ラウンドが開始されていない状態で推測が送られた
  #[error("no active round")]
  NoActiveRound,

  /// 推測の入力値が不正（空の文字、複数文字、空の単語）
  #[error("invalid guess: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },
}

impl GameError {
  /// 入力不正エラーを作成
  #[must_use]
  pub fn invalid_input(reason: impl Into<String>) -> Self {
    Self::InvalidInput {
      reason: reason.into(),
    }
  }
}

/// hangman クレートの標準 Result 型エイリアス
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_active_round_message() {
    assert_eq!(GameError::NoActiveRound.to_string(), "no active round");
  }

  #[test]
  fn invalid_input_carries_reason() {
    let err = GameError::invalid_input("letter is empty");
    assert_eq!(
      err,
      GameError::InvalidInput {
        reason: "letter is empty".to_string()
      }
    );
    assert!(err.to_string().contains("letter is empty"));
  }
}
