//! hangman-api crate
//!
//! Web server exposing the hangman word-guessing game as HTTP API.
//! At most one round is in progress at a time; starting a round replaces the previous one.
//!
//! ## Endpoints
//! - `GET /start` (alias `GET /word`) - Start a new round
//! - `POST /guess/letter` - Guess a single letter
//! - `POST /guess/word` - Guess the whole word
//! - `GET /` - Greeting
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl http://127.0.0.1:8080/start
//! curl -X POST http://127.0.0.1:8080/guess/letter \
//!   -H "Content-Type: application/json" \
//!   -d '{"letter": "e"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{GuessResponse, LetterGuessRequest, StartResponse, WordGuessRequest};
pub use service::HangmanApiServiceFull;
