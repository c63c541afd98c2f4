//! Page route handlers.
//!
//! | Path | Page |
//! |------|------|
//! | `/`, `/{page}/` | current event |
//! | `/events/{id}/`, `/events/{id}/{page}/` | archived event `id` |
//!
//! The same paths without the trailing slash redirect permanently.

use aiw_core::{EventContext, page::Page};
use axum::{
  extract::{Path, State},
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Redirect, Response},
};

use crate::{
  AppState,
  error::Error,
  etag::{compute_etag, if_none_match},
  pages,
};

// ─── Current event ───────────────────────────────────────────────────────────

/// `GET /`
pub async fn current_home(
  State(state): State<AppState>,
  headers: HeaderMap,
) -> Response {
  render(&state, None, Page::Home, &headers).into_response_or_err()
}

/// `GET /{page}/`
pub async fn current_page(
  State(state): State<AppState>,
  Path(slug): Path<String>,
  headers: HeaderMap,
) -> Response {
  let Some(page) = Page::from_slug(&slug) else {
    return Error::NotFound(format!("no page {slug:?}")).into_response();
  };
  render(&state, None, page, &headers).into_response_or_err()
}

/// `GET /{page}` → `/{page}/`
pub async fn current_page_redirect(Path(slug): Path<String>) -> Response {
  match Page::from_slug(&slug) {
    Some(page) => Redirect::permanent(&format!("/{}/", page.slug())).into_response(),
    None => Error::NotFound(format!("no page {slug:?}")).into_response(),
  }
}

// ─── Archived events ─────────────────────────────────────────────────────────

/// `GET /events/{id}/`
pub async fn archived_home(
  State(state): State<AppState>,
  Path(id): Path<String>,
  headers: HeaderMap,
) -> Response {
  render(&state, Some(&id), Page::Home, &headers).into_response_or_err()
}

/// `GET /events/{id}/{page}/`
pub async fn archived_page(
  State(state): State<AppState>,
  Path((id, slug)): Path<(String, String)>,
  headers: HeaderMap,
) -> Response {
  let Some(page) = Page::from_slug(&slug) else {
    return Error::NotFound(format!("no page {slug:?}")).into_response();
  };
  render(&state, Some(&id), page, &headers).into_response_or_err()
}

/// `GET /events/{id}` → `/events/{id}/`
pub async fn archived_home_redirect(Path(id): Path<String>) -> Response {
  Redirect::permanent(&format!("/events/{id}/")).into_response()
}

/// `GET /events/{id}/{page}` → `/events/{id}/{page}/`
pub async fn archived_page_redirect(
  Path((id, slug)): Path<(String, String)>,
) -> Response {
  match Page::from_slug(&slug) {
    Some(page) => {
      Redirect::permanent(&format!("/events/{id}/{}/", page.slug()))
        .into_response()
    }
    None => Error::NotFound(format!("no page {slug:?}")).into_response(),
  }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Derive the context, build the page and answer with its JSON body, or 304
/// when the client already holds it.
///
/// `/events/{id}/` only serves archived events; the current event lives at
/// the root.
fn render(
  state: &AppState,
  event_id: Option<&str>,
  page: Page,
  headers: &HeaderMap,
) -> Result<Response, Error> {
  let ctx = EventContext::resolve(&state.registry, event_id)?;
  if let Some(id) = event_id
    && !ctx.is_archived
  {
    return Err(Error::NotFound(format!("event {id} is not archived")));
  }

  let view = pages::build(&state.registry, &ctx, page)?;
  let body = serde_json::to_vec(&view)?;
  let etag = compute_etag(&body);

  if if_none_match(headers, &etag) {
    tracing::debug!(route = %view.route, "page not modified");
    return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
  }

  tracing::debug!(route = %view.route, bytes = body.len(), "rendered page");
  Ok(
    (
      StatusCode::OK,
      [
        (header::CONTENT_TYPE, "application/json".to_owned()),
        (header::ETAG, etag),
      ],
      body,
    )
      .into_response(),
  )
}

// ─── Helper trait ────────────────────────────────────────────────────────────

trait IntoResponseOrErr {
  fn into_response_or_err(self) -> Response;
}

impl IntoResponseOrErr for Result<Response, Error> {
  fn into_response_or_err(self) -> Response {
    match self {
      Ok(r) => r,
      Err(e) => e.into_response(),
    }
  }
}
