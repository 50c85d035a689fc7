//! サービスモジュール

mod hangman_api_service;

pub use hangman_api_service::{HangmanApiService, HangmanApiServiceFull};
