//! モデルモジュール

mod request;
mod response;

pub use request::{LetterGuessRequest, WordGuessRequest};
pub use response::{
  GREETING_MESSAGE, GreetingResponse, GuessResponse, LOSS_MESSAGE, StartResponse, WIN_MESSAGE,
};
