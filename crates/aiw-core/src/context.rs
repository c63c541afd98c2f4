//! Event context: which event a page renders and where its links point.
//!
//! A context is derived per request from an optional event id and handed to
//! every consumer as an argument. It is never cached across requests.

use serde::Serialize;

use crate::{Error, Result, event::Event, link, registry::EventRegistry};

/// The active event for one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext<'a> {
  /// The id the page asked for; `None` on the current event's pages.
  pub requested_id: Option<String>,
  pub event:        &'a Event,
  pub is_archived:  bool,
  /// Prefix for in-site links: `""` for the current event, `/events/{id}`
  /// for an archived one.
  pub base_path:    String,
}

impl<'a> EventContext<'a> {
  /// Resolve the active event.
  ///
  /// With an id, the event must exist ([`Error::EventNotFound`] otherwise);
  /// without one, the registry's current event is used
  /// ([`Error::NoCurrentEvent`] if there is none). Both are configuration
  /// errors and are not recovered here.
  pub fn resolve(
    registry: &'a EventRegistry,
    event_id: Option<&str>,
  ) -> Result<Self> {
    let event = match event_id {
      Some(id) => registry
        .event_by_id(id)
        .ok_or_else(|| Error::EventNotFound(id.to_owned()))?,
      None => registry.current_event()?,
    };

    let is_archived = event.is_archived();
    let base_path = if is_archived {
      format!("/events/{}", event.event_id)
    } else {
      String::new()
    };

    Ok(Self {
      requested_id: event_id.map(str::to_owned),
      event,
      is_archived,
      base_path,
    })
  }

  /// Resolve `href` against this context's base path.
  pub fn link(&self, href: &str) -> String {
    link::resolve_href(&self.base_path, href)
  }

  pub fn summary(&self) -> ContextSummary {
    ContextSummary {
      event_id:     self.event.event_id.clone(),
      event_number: self.event.event_number,
      requested_id: self.requested_id.clone(),
      is_archived:  self.is_archived,
      base_path:    self.base_path.clone(),
    }
  }
}

/// Serialisable snapshot of an [`EventContext`] without the event body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSummary {
  pub event_id:     String,
  pub event_number: u32,
  pub requested_id: Option<String>,
  pub is_archived:  bool,
  pub base_path:    String,
}
