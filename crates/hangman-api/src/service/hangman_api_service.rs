//! Game Service

use hangman::HangmanService;
use tracing::debug;

use crate::config::Config;
use crate::errors::Result;
use crate::models::{GuessResponse, LetterGuessRequest, StartResponse, WordGuessRequest};

/// Common interface for the game service
///
/// This trait allows swapping production implementation (`HangmanApiServiceFull`) with
/// test stubs/mocks.
pub trait HangmanApiService: Send + Sync {
  /// Starts a new round, discarding any previous one
  ///
  /// # Errors
  /// - Internal error
  fn start_round(&self) -> Result<StartResponse>;

  /// Guesses a single letter
  ///
  /// # Errors
  /// - No active round
  /// - Input error (empty or multi-character letter)
  fn guess_letter(&self, request: LetterGuessRequest) -> Result<GuessResponse>;

  /// Guesses the whole word
  ///
  /// # Errors
  /// - No active round
  /// - Input error (empty word)
  fn guess_word(&self, request: WordGuessRequest) -> Result<GuessResponse>;
}

/// Game Service
///
/// Owns the single game slot and the round settings taken from `Config`.
#[derive(Debug)]
pub struct HangmanApiServiceFull {
  /// Single-session game slot
  game: HangmanService,
  /// Word used for every new round
  secret_word: String,
  /// Whether the start response carries the word
  expose_word: bool,
}

impl HangmanApiServiceFull {
  /// Initializes the service with no round in progress
  ///
  /// # Arguments
  /// * `config` - Configuration (secret word and expose flag)
  #[must_use]
  pub fn new(config: &Config) -> Self {
    Self {
      game: HangmanService::new(),
      secret_word: config.secret_word.clone(),
      expose_word: config.expose_word,
    }
  }
}

/// Production implementation of trait `HangmanApiService`
impl HangmanApiService for HangmanApiServiceFull {
  fn start_round(&self) -> Result<StartResponse> {
    let info = self.game.start_round(&self.secret_word);
    Ok(StartResponse::from_round(info, self.expose_word))
  }

  fn guess_letter(&self, request: LetterGuessRequest) -> Result<GuessResponse> {
    let outcome = self.game.guess_letter(&request.letter)?;
    debug!(status = %outcome.status(), "letter guess applied");
    Ok(outcome.into())
  }

  fn guess_word(&self, request: WordGuessRequest) -> Result<GuessResponse> {
    let outcome = self.game.guess_word(&request.word)?;
    debug!(status = %outcome.status(), "word guess applied");
    Ok(outcome.into())
  }
}
