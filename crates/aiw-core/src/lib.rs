//! Core types for the Agentic Internet Workshop site.
//!
//! This crate holds the event model, the in-memory [`EventRegistry`], event
//! context derivation and context-aware link resolution, plus the small view
//! models every page is assembled from. It has no HTTP or file-system
//! dependencies; catalogs are loaded by `aiw-catalog` and served by
//! `aiw-api` / `aiw-site`.

pub mod context;
pub mod error;
pub mod event;
pub mod link;
pub mod navigation;
pub mod page;
pub mod registry;
pub mod topics;

pub use context::EventContext;
pub use error::{Error, Result};
pub use registry::EventRegistry;
