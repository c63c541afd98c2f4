//! Page server for the Agentic Internet Workshop site.
//!
//! Serves the view model of every page at the same routes the static site
//! uses, and mounts the JSON API under `/api`. The event registry is built
//! once at startup and shared read-only by all handlers.

pub mod error;
pub mod etag;
pub mod handlers;
pub mod pages;
pub mod routes;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use aiw_catalog::LoadedCatalog;
use aiw_core::EventRegistry;
use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3000 }

fn default_site_base_path() -> String {
  "/agenticinternetworkshop.org".to_string()
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `AIW_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  /// JSON or TOML catalog; the built-in dataset when unset.
  #[serde(default)]
  pub catalog_path:   Option<PathBuf>,
  /// Sub-path the exported site is hosted under. Prefixes the route
  /// manifest only; in-site links stay relative to the site root.
  #[serde(default = "default_site_base_path")]
  pub site_base_path: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           default_host(),
      port:           default_port(),
      catalog_path:   None,
      site_base_path: default_site_base_path(),
    }
  }
}

impl ServerConfig {
  /// Build the registry this configuration points at.
  pub fn load_catalog(&self) -> aiw_catalog::Result<LoadedCatalog> {
    match &self.catalog_path {
      Some(path) => aiw_catalog::load(path),
      None => aiw_catalog::builtin(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all page handlers.
#[derive(Clone)]
pub struct AppState {
  pub registry: Arc<EventRegistry>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the site router: page routes, `/api`, and request tracing.
pub fn router(state: AppState) -> Router {
  let api = aiw_api::api_router(state.registry.clone());

  Router::new()
    .route("/",                      get(handlers::current_home))
    .route("/{page}",                get(handlers::current_page_redirect))
    .route("/{page}/",               get(handlers::current_page))
    .route("/events/{id}",           get(handlers::archived_home_redirect))
    .route("/events/{id}/",          get(handlers::archived_home))
    .route("/events/{id}/{page}",    get(handlers::archived_page_redirect))
    .route("/events/{id}/{page}/",   get(handlers::archived_page))
    .with_state(state)
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
