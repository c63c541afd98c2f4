//! JSON REST API for the Agentic Internet Workshop site.
//!
//! Exposes an axum [`Router`] over a shared, read-only [`EventRegistry`]:
//! the raw event records, context derivation and link resolution.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", aiw_api::api_router(registry.clone()))
//! ```

pub mod context;
pub mod error;
pub mod events;
pub mod links;

use std::sync::Arc;

use aiw_core::EventRegistry;
use axum::{Router, routing::get};

pub use error::ApiError;

/// Build the API router for `registry`.
///
/// `/events/current` and `/events/archived` take precedence over
/// `/events/{id}`, so events with those ids are only reachable through the
/// list endpoints.
pub fn api_router(registry: Arc<EventRegistry>) -> Router<()> {
  Router::new()
    .route("/events", get(events::list))
    .route("/events/current", get(events::current))
    .route("/events/archived", get(events::archived))
    .route("/events/{id}", get(events::get_one))
    .route("/context", get(context::handler))
    .route("/links/resolve", get(links::resolve))
    .with_state(registry)
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use aiw_core::{EventRegistry, event::EventStatus};
  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use serde_json::Value;
  use tower::ServiceExt as _;

  use super::api_router;

  fn builtin() -> Arc<EventRegistry> {
    Arc::new(aiw_catalog::builtin().unwrap().registry)
  }

  async fn get_json(
    registry: Arc<EventRegistry>,
    uri: &str,
  ) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = api_router(registry).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  // ── Events ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_returns_events_in_catalog_order() {
    let (status, body) = get_json(builtin(), "/events").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|e| e["event_id"].as_str().unwrap())
      .collect();
    assert_eq!(ids, ["1", "2"]);
  }

  #[tokio::test]
  async fn current_returns_event_2() {
    let (status, body) = get_json(builtin(), "/events/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_id"], "2");
    assert_eq!(body["status"], "current");
  }

  #[tokio::test]
  async fn archived_returns_event_1() {
    let (status, body) = get_json(builtin(), "/events/archived").await;
    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event_id"], "1");
  }

  #[tokio::test]
  async fn get_one_known_and_unknown() {
    let (status, body) = get_json(builtin(), "/events/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_number"], 1);

    let (status, body) = get_json(builtin(), "/events/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("99"));
  }

  #[tokio::test]
  async fn current_without_current_event_is_500() {
    let mut events: Vec<_> = aiw_catalog::builtin()
      .unwrap()
      .registry
      .events()
      .cloned()
      .collect();
    for event in &mut events {
      event.status = EventStatus::Archived;
    }
    let registry = Arc::new(EventRegistry::new(events).unwrap());

    let (status, body) = get_json(registry, "/events/current").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "no current event found");
  }

  // ── Context ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn context_for_archived_event() {
    let (status, body) = get_json(builtin(), "/context?event_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_archived"], true);
    assert_eq!(body["base_path"], "/events/1");
    assert_eq!(body["requested_id"], "1");
  }

  #[tokio::test]
  async fn context_defaults_to_current_event() {
    let (status, body) = get_json(builtin(), "/context").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_id"], "2");
    assert_eq!(body["is_archived"], false);
    assert_eq!(body["base_path"], "");
    assert!(body["requested_id"].is_null());
  }

  #[tokio::test]
  async fn context_for_unknown_event_is_404() {
    let (status, _) = get_json(builtin(), "/context?event_id=nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Links ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn links_resolve_within_archived_event() {
    let (status, body) =
      get_json(builtin(), "/links/resolve?href=%2Ftopics&event_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resolved"], "/events/1/topics");
    assert_eq!(body["base_path"], "/events/1");
  }

  #[tokio::test]
  async fn links_pass_through_anchors_and_external_urls() {
    let (_, body) =
      get_json(builtin(), "/links/resolve?href=%23register&event_id=1").await;
    assert_eq!(body["resolved"], "#register");

    let (_, body) = get_json(
      builtin(),
      "/links/resolve?href=https%3A%2F%2Fexample.com&event_id=1",
    )
    .await;
    assert_eq!(body["resolved"], "https://example.com");
  }

  #[tokio::test]
  async fn links_for_current_event_stay_at_root() {
    let (_, body) = get_json(builtin(), "/links/resolve?href=%2Ftopics").await;
    assert_eq!(body["resolved"], "/topics");
  }

  #[tokio::test]
  async fn empty_href_is_400() {
    let (status, body) = get_json(builtin(), "/links/resolve?href=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
  }
}
