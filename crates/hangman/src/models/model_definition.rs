//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Lifecycle state of a round.
///
/// `Won` and `Lost` are terminal: once reached, guesses no longer change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
  /// Guesses are still accepted
  InProgress,
  /// Every position was revealed, or the whole word was guessed
  Won,
  /// The incorrect-guess counter reached `MAX_GUESSES`
  Lost,
}

impl GameStatus {
  /// Returns the status name used in logs and serialized payloads.
  pub fn code(&self) -> &'static str {
    match self {
      GameStatus::InProgress => "in_progress",
      GameStatus::Won => "won",
      GameStatus::Lost => "lost",
    }
  }

  /// Whether the round has ended.
  pub fn is_terminal(&self) -> bool {
    matches!(self, GameStatus::Won | GameStatus::Lost)
  }
}

impl std::fmt::Display for GameStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// Returned when a round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundInfo {
  /// Number of characters in the secret word
  pub word_length: usize,

  /// The secret word itself
  ///
  /// The HTTP layer decides whether to expose it.
  pub word: String,
}

/// Result of a single letter or word guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GuessOutcome {
  /// The round continues
  InProgress {
    /// Whether the guess revealed (or had already revealed) at least one position
    correct: bool,
    /// `MAX_GUESSES` minus the incorrect-guess count
    guesses_left: u32,
    /// Reveal mask rendered as a string
    current_state: String,
  },

  /// The round is won
  Won,

  /// The round is lost
  Lost {
    /// Final reveal mask rendered as a string
    current_state: String,
  },
}

impl GuessOutcome {
  /// Returns the round status this outcome corresponds to.
  pub fn status(&self) -> GameStatus {
    match self {
      GuessOutcome::InProgress { .. } => GameStatus::InProgress,
      GuessOutcome::Won => GameStatus::Won,
      GuessOutcome::Lost { .. } => GameStatus::Lost,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_terminal_flags() {
    assert!(!GameStatus::InProgress.is_terminal());
    assert!(GameStatus::Won.is_terminal());
    assert!(GameStatus::Lost.is_terminal());
  }

  #[test]
  fn status_display_matches_serde_name() {
    for status in [GameStatus::InProgress, GameStatus::Won, GameStatus::Lost] {
      let json = serde_json::to_string(&status).unwrap();
      assert_eq!(json, format!("\"{status}\""));
    }
  }

  #[test]
  fn outcome_serialization_is_tagged_by_status() {
    let outcome = GuessOutcome::InProgress {
      correct: true,
      guesses_left: 5,
      current_state: "c**".to_string(),
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["guesses_left"], 5);
    assert_eq!(json["current_state"], "c**");

    let json = serde_json::to_value(GuessOutcome::Won).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "won" }));
  }

  #[test]
  fn outcome_status_mapping() {
    let lost = GuessOutcome::Lost {
      current_state: "***".to_string(),
    };
    assert_eq!(lost.status(), GameStatus::Lost);
    assert_eq!(GuessOutcome::Won.status(), GameStatus::Won);
  }
}
