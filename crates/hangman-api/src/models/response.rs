//! Response Model Definition

use serde::Serialize;

use hangman::{GuessOutcome, RoundInfo};

/// Message returned when the round is won
pub const WIN_MESSAGE: &str = "You Won!";

/// Message returned when the round is lost
pub const LOSS_MESSAGE: &str = "You Lost! Start Again.";

/// Message returned by `GET /`
pub const GREETING_MESSAGE: &str = "hello, world!";

/// Round Start Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartResponse {
  /// Number of characters in the secret word
  pub word_length: usize,
  /// Secret word, only when `HANGMAN_EXPOSE_WORD` is enabled
  #[serde(skip_serializing_if = "Option::is_none")]
  pub word: Option<String>,
}

impl StartResponse {
  /// Convert from the core round info
  ///
  /// # Arguments
  /// * `info` - Round info returned by the game service
  /// * `expose_word` - Whether to keep the secret word in the response
  #[must_use]
  pub fn from_round(info: RoundInfo, expose_word: bool) -> Self {
    Self {
      word_length: info.word_length,
      word: expose_word.then_some(info.word),
    }
  }
}

/// Guess Response
///
/// Serialized without a tag, so the three shapes are:
/// - `{correct, guesses_left, current_state}`
/// - `{message: "You Won!"}`
/// - `{message: "You Lost! Start Again.", current_state}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GuessResponse {
  /// Round still in progress
  Progress {
    /// Whether the guess matched
    correct: bool,
    /// Remaining incorrect guesses allowed
    guesses_left: u32,
    /// Reveal mask
    current_state: String,
  },
  /// Round finished (won or lost)
  Finished {
    /// Win or loss message
    message: &'static str,
    /// Final reveal mask (loss only)
    #[serde(skip_serializing_if = "Option::is_none")]
    current_state: Option<String>,
  },
}

impl From<GuessOutcome> for GuessResponse {
  fn from(outcome: GuessOutcome) -> Self {
    match outcome {
      GuessOutcome::InProgress {
        correct,
        guesses_left,
        current_state,
      } => Self::Progress {
        correct,
        guesses_left,
        current_state,
      },
      GuessOutcome::Won => Self::Finished {
        message: WIN_MESSAGE,
        current_state: None,
      },
      GuessOutcome::Lost { current_state } => Self::Finished {
        message: LOSS_MESSAGE,
        current_state: Some(current_state),
      },
    }
  }
}

/// Greeting Response for `GET /`
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
  /// Fixed greeting
  pub message: &'static str,
}
