//! Handlers for `/events` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/events` | Every event, in catalog order |
//! | `GET`  | `/events/current` | 500 if the catalog has no current event |
//! | `GET`  | `/events/archived` | Archived events, in catalog order |
//! | `GET`  | `/events/{id}` | 404 if not found |

use std::sync::Arc;

use aiw_core::{EventRegistry, event::Event};
use axum::{
  Json,
  extract::{Path, State},
};

use crate::error::ApiError;

/// `GET /events`
pub async fn list(State(registry): State<Arc<EventRegistry>>) -> Json<Vec<Event>> {
  Json(registry.events().cloned().collect())
}

/// `GET /events/current`
pub async fn current(
  State(registry): State<Arc<EventRegistry>>,
) -> Result<Json<Event>, ApiError> {
  Ok(Json(registry.current_event()?.clone()))
}

/// `GET /events/archived`
pub async fn archived(
  State(registry): State<Arc<EventRegistry>>,
) -> Json<Vec<Event>> {
  Json(registry.archived_events().into_iter().cloned().collect())
}

/// `GET /events/{id}`
pub async fn get_one(
  State(registry): State<Arc<EventRegistry>>,
  Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
  let event = registry
    .event_by_id(&id)
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;
  Ok(Json(event.clone()))
}
