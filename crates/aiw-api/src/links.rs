//! Handler for `GET /links/resolve`.

use std::sync::Arc;

use aiw_core::{EventContext, EventRegistry};
use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
  pub href:     String,
  /// Event whose pages the link appears on; the current event if absent.
  pub event_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolvedLink {
  pub href:      String,
  pub base_path: String,
  pub resolved:  String,
}

/// `GET /links/resolve?href=<href>[&event_id=<id>]`
pub async fn resolve(
  State(registry): State<Arc<EventRegistry>>,
  Query(params): Query<ResolveParams>,
) -> Result<Json<ResolvedLink>, ApiError> {
  if params.href.is_empty() {
    return Err(ApiError::BadRequest("href must not be empty".into()));
  }
  let ctx = EventContext::resolve(&registry, params.event_id.as_deref())?;
  Ok(Json(ResolvedLink {
    resolved:  ctx.link(&params.href),
    base_path: ctx.base_path,
    href:      params.href,
  }))
}
