//! Error types and axum `IntoResponse` implementation.
//!
//! Catalog errors stand in for the site's error boundary: the page cannot be
//! built, the body says so, and the client may retry.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found: {0}")]
  NotFound(String),
  #[error("catalog error: {0}")]
  Catalog(#[source] aiw_core::Error),
  #[error("render error: {0}")]
  Render(#[from] serde_json::Error),
}

impl From<aiw_core::Error> for Error {
  fn from(e: aiw_core::Error) -> Self {
    match e {
      aiw_core::Error::EventNotFound(id) => {
        Error::NotFound(format!("event {id} not found"))
      }
      other => Error::Catalog(other),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound(msg) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
      }
      Error::Catalog(e) => {
        tracing::error!("cannot build page: {e}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({
            "title": "Error loading event",
            "error": e.to_string(),
            "retry": true,
          })),
        )
          .into_response()
      }
      Error::Render(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
    }
  }
}
