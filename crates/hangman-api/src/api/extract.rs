//! リクエストボディの抽出

use axum::extract::FromRequest;

use crate::errors::ApiError;

/// `axum::Json` と同じ抽出を行い、失敗時は `ApiError` の JSON 形式で返す
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
