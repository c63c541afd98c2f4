//! Handler for `GET /context`.
//!
//! Derives the event context a page would render with. Without `event_id`
//! this is the current event's context.

use std::sync::Arc;

use aiw_core::{EventContext, EventRegistry, context::ContextSummary};
use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct ContextParams {
  pub event_id: Option<String>,
}

/// `GET /context[?event_id=<id>]`
pub async fn handler(
  State(registry): State<Arc<EventRegistry>>,
  Query(params): Query<ContextParams>,
) -> Result<Json<ContextSummary>, ApiError> {
  let ctx = EventContext::resolve(&registry, params.event_id.as_deref())?;
  Ok(Json(ctx.summary()))
}
