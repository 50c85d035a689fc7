//! hangman 単語当てゲームライブラリー
//!
//! 秘密の単語・公開マスク・不正解カウンターからなる 1 ラウンド分の
//! 状態機械と、それを排他制御付きで保持するサービスを提供する

/// 定数モジュール - MAX_GUESSES, PLACEHOLDER 等のゲームルール定数を定義
pub mod constants;

/// エラーモジュール - GameError, GameResult 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - GameStatus, GuessOutcome, RoundInfo 等のデータ構造を定義
pub mod models;

/// サービスモジュール - HangmanService（単一セッションの排他制御付きスロット）を提供
pub mod service;

/// セッションモジュール - 1 ラウンド分の状態機械 GameSession を定義
pub mod session;

/// 再エクスポート
pub use constants::{MAX_GUESSES, PLACEHOLDER};
pub use errors::{GameError, GameResult};
pub use models::{GameStatus, GuessOutcome, RoundInfo};
pub use service::HangmanService;
pub use session::GameSession;
