//! Config loading from environment variables

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_SECRET_WORD, ENV_BIND_ADDR, ENV_EXPOSE_WORD, ENV_SECRET_WORD,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8080")
  pub bind_addr: String,
  /// Word used for every new round
  pub secret_word: String,
  /// Include the secret word in the round start response (debugging only)
  pub expose_word: bool,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a map lookup instead of touching
  /// the process environment.
  ///
  /// # Errors
  /// - The secret word is empty or whitespace only
  /// - The expose flag is not a recognized boolean
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let secret_word = match lookup(ENV_SECRET_WORD) {
      Some(word) => word.trim().to_string(),
      None => DEFAULT_SECRET_WORD.to_string(),
    };
    if secret_word.is_empty() {
      return Err(ApiError::config(format!("{ENV_SECRET_WORD} must not be empty")));
    }

    let expose_word = match lookup(ENV_EXPOSE_WORD) {
      Some(raw) => parse_flag(ENV_EXPOSE_WORD, &raw)?,
      None => false,
    };

    Ok(Self {
      bind_addr,
      secret_word,
      expose_word,
    })
  }
}

fn parse_flag(key: &str, raw: &str) -> crate::errors::Result<bool> {
  match raw.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    other => Err(ApiError::config(format!(
      "Invalid boolean for {key}: {other}. Valid values: true, false, 1, 0, yes, no, on, off"
    ))),
  }
}
