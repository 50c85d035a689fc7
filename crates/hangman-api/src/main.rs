//! hangman-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hangman_api::ApiError;
use hangman_api::api::AppState;
use hangman_api::api::run_server;
use hangman_api::config::Config;
use hangman_api::service::HangmanApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env の読み込み（RUST_LOG を含む可能性があるためロギング初期化より前）
  let dotenv = dotenvy::dotenv();

  // ロギングの初期化
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  match dotenv {
    Ok(path) => tracing::info!(path = %path.display(), ".env を読み込みました"),
    Err(e) if e.not_found() => tracing::debug!(".env が見つかりません"),
    Err(e) => tracing::warn!(error = %e, ".env の読み込みに失敗しました"),
  }

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    expose_word = config.expose_word,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(HangmanApiServiceFull::new(&config));
  tracing::info!("ゲームサービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
