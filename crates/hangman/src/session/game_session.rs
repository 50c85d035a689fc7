// crates/hangman/src/session/game_session.rs

//! GameSession: 1 ラウンド分の状態機械。
//!
//! - 秘密の単語 (secret_word) - ラウンド中は不変
//! - 公開マスク (reveal_mask) - 未公開位置は `PLACEHOLDER`
//! - 不正解カウンター (incorrect_guesses) - `MAX_GUESSES` で敗北
//!
//! 文字は `char` 単位で扱うため、長さはバイト数ではなく文字数となる。

use tracing::debug;

use crate::constants::{MAX_GUESSES, PLACEHOLDER};
use crate::models::{GameStatus, GuessOutcome, RoundInfo};

/// 1 ラウンド分のゲーム状態。
///
/// 新しいラウンドの開始時に丸ごと作り直される。
/// 終了状態（`Won` / `Lost`）に達した後の推測は状態を変更せず、
/// 終了時の結果をそのまま返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
  /// 秘密の単語
  secret_word: Vec<char>,

  /// 公開マスク（`secret_word` と常に同じ長さ）
  reveal_mask: Vec<char>,

  /// 不正解の回数（単調非減少、`MAX_GUESSES` 以下）
  incorrect_guesses: u32,

  /// ラウンドの状態
  status: GameStatus,
}

impl GameSession {
  /// 新しいラウンドを作成する。マスクはすべてプレースホルダー、カウンターは 0。
  pub fn new(word: &str) -> Self {
    let secret_word: Vec<char> = word.chars().collect();
    let reveal_mask = vec![PLACEHOLDER; secret_word.len()];

    Self {
      secret_word,
      reveal_mask,
      incorrect_guesses: 0,
      status: GameStatus::InProgress,
    }
  }

  /// ラウンド開始時に返す情報
  pub fn round_info(&self) -> RoundInfo {
    RoundInfo {
      word_length: self.secret_word.len(),
      word: self.secret_word.iter().collect(),
    }
  }

  /// 現在のラウンド状態
  pub fn status(&self) -> GameStatus {
    self.status
  }

  /// 不正解の回数
  pub fn incorrect_guesses(&self) -> u32 {
    self.incorrect_guesses
  }

  /// 残りの推測回数
  pub fn guesses_left(&self) -> u32 {
    MAX_GUESSES - self.incorrect_guesses
  }

  /// 公開マスクを文字列にしたもの
  pub fn current_state(&self) -> String {
    self.reveal_mask.iter().collect()
  }

  /// 1 文字を推測する。
  ///
  /// 一致したすべての位置を公開する。1 か所も一致しなかった場合のみ
  /// 不正解カウンターを増やす。既に公開済みの文字の再推測は正解扱いで、
  /// カウンターは変化しない。
  pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
    if let Some(outcome) = self.terminal_outcome() {
      return outcome;
    }

    let mut correct = false;
    for (slot, &ch) in self.reveal_mask.iter_mut().zip(&self.secret_word) {
      if ch == letter {
        *slot = ch;
        correct = true;
      }
    }

    if !correct {
      self.record_miss();
    }

    debug!(%letter, correct, incorrect_guesses = self.incorrect_guesses, "letter guessed");
    self.settle(correct)
  }

  /// 単語全体を推測する。
  ///
  /// 完全一致なら即座に勝利（カウンターは変化しない）。
  /// 不一致の場合はカウンターを増やし、マスクは一切公開しない。
  pub fn guess_word(&mut self, word: &str) -> GuessOutcome {
    if let Some(outcome) = self.terminal_outcome() {
      return outcome;
    }

    if word.chars().eq(self.secret_word.iter().copied()) {
      debug!("word guessed correctly");
      self.status = GameStatus::Won;
      return GuessOutcome::Won;
    }

    self.record_miss();

    debug!(incorrect_guesses = self.incorrect_guesses, "word guess missed");
    self.settle(false)
  }

  /// 終了状態であれば、終了時の結果を返す
  fn terminal_outcome(&self) -> Option<GuessOutcome> {
    match self.status {
      GameStatus::InProgress => None,
      GameStatus::Won => Some(GuessOutcome::Won),
      GameStatus::Lost => Some(GuessOutcome::Lost {
        current_state: self.current_state(),
      }),
    }
  }

  fn record_miss(&mut self) {
    // InProgress の間は incorrect_guesses < MAX_GUESSES
    self.incorrect_guesses = (self.incorrect_guesses + 1).min(MAX_GUESSES);
  }

  /// 勝利判定 → 敗北判定の順に状態遷移を確定する
  fn settle(&mut self, correct: bool) -> GuessOutcome {
    if self.reveal_mask == self.secret_word {
      self.status = GameStatus::Won;
      return GuessOutcome::Won;
    }

    if self.incorrect_guesses >= MAX_GUESSES {
      self.status = GameStatus::Lost;
      return GuessOutcome::Lost {
        current_state: self.current_state(),
      };
    }

    GuessOutcome::InProgress {
      correct,
      guesses_left: self.guesses_left(),
      current_state: self.current_state(),
    }
  }
}
