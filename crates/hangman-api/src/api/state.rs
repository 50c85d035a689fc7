//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::HangmanApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Game Service (owns the single game session)
  ///
  /// - Production: `Arc::new(HangmanApiServiceFull::new(&config))`
  /// - Test: `Arc::new(StubHangmanApiService)`
  pub service: Arc<dyn HangmanApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn HangmanApiService>) -> Self {
    Self { config, service }
  }
}
