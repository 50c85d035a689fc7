// crates/hangman/src/service.rs

//! HangmanService: hangman クレートの統合ファサード。
//!
//! 同時に進行するラウンドは最大 1 つ。セッション全体を 1 つの `Mutex` で保護し、
//! 各操作（取得 → 検証 → 更新 → 解放）を不可分に適用する。
//! 並行する推測同士がフィールド単位で交錯することはない。
//!
//! HTTP サーバーなどの外部からは、この構造体だけを意識すればよい。

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::errors::{GameError, GameResult};
use crate::models::{GameStatus, GuessOutcome, RoundInfo};
use crate::session::GameSession;

/// 単一セッションを保持するスロット。
///
/// プロセス全体のグローバル変数ではなく、呼び出し側（API の `AppState` など）が
/// 所有して参照を渡す。
#[derive(Debug, Default)]
pub struct HangmanService {
  /// 進行中（または終了済み）のラウンド。未開始なら `None`
  slot: Mutex<Option<GameSession>>,
}

impl HangmanService {
  /// ラウンド未開始の状態で作成する
  pub fn new() -> Self {
    Self::default()
  }

  /// 新しいラウンドを開始する。既存のラウンドは破棄される。
  pub fn start_round(&self, word: &str) -> RoundInfo {
    let session = GameSession::new(word);
    let info = session.round_info();

    let mut slot = self.lock();
    let replaced = slot.replace(session);

    info!(
      word_length = info.word_length,
      replaced_status = replaced.as_ref().map(|s| s.status().code()),
      "round started"
    );
    info
  }

  /// 1 文字を推測する。
  ///
  /// # エラー
  /// - ラウンドが開始されていない
  /// - `letter` がちょうど 1 文字ではない
  pub fn guess_letter(&self, letter: &str) -> GameResult<GuessOutcome> {
    self.with_session(|session| {
      let letter = parse_letter(letter)?;
      Ok(session.guess_letter(letter))
    })
  }

  /// 単語全体を推測する。
  ///
  /// # エラー
  /// - ラウンドが開始されていない
  /// - `word` が空
  pub fn guess_word(&self, word: &str) -> GameResult<GuessOutcome> {
    self.with_session(|session| {
      if word.is_empty() {
        return Err(GameError::invalid_input("word is empty"));
      }
      Ok(session.guess_word(word))
    })
  }

  /// 現在のラウンド状態。未開始なら `None`
  pub fn status(&self) -> Option<GameStatus> {
    self.lock().as_ref().map(GameSession::status)
  }

  /// ロックを保持したまま、現在のセッションに `op` を適用する
  fn with_session<T>(
    &self,
    op: impl FnOnce(&mut GameSession) -> GameResult<T>,
  ) -> GameResult<T> {
    let mut slot = self.lock();
    let session = slot.as_mut().ok_or_else(|| {
      debug!("guess rejected: no active round");
      GameError::NoActiveRound
    })?;

    let before = session.status();
    let result = op(session);

    if before != session.status() {
      info!(status = %session.status(), "round finished");
    }
    result
  }

  fn lock(&self) -> MutexGuard<'_, Option<GameSession>> {
    // 入力検証は更新より前に行うため、ポイズン状態でもセッションは整合している
    self.slot.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

/// 推測文字列がちょうど 1 文字であることを検証する
fn parse_letter(letter: &str) -> GameResult<char> {
  let mut chars = letter.chars();
  match (chars.next(), chars.next()) {
    (Some(ch), None) => Ok(ch),
    (None, _) => Err(GameError::invalid_input("letter is empty")),
    (Some(_), Some(_)) => Err(GameError::invalid_input(format!(
      "letter must be a single character, got {} characters",
      letter.chars().count()
    ))),
  }
}
