//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The catalog itself is inconsistent (e.g. it has no current event).
  #[error("catalog error: {0}")]
  Catalog(#[source] aiw_core::Error),
}

impl From<aiw_core::Error> for ApiError {
  fn from(e: aiw_core::Error) -> Self {
    match e {
      aiw_core::Error::EventNotFound(id) => {
        ApiError::NotFound(format!("event {id} not found"))
      }
      other => ApiError::Catalog(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Catalog(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
