//! [`EventRegistry`]: the canonical, immutable set of event records.
//!
//! The registry is built once, explicitly, from a list of events (see
//! `aiw-catalog`) and then shared read-only. Iteration order is the order the
//! events were supplied in; nothing is re-sorted.

use std::collections::HashMap;

use crate::{
  Error, Result,
  event::{Event, EventStatus},
};

#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
  events: Vec<Event>,
  /// `event_id` → position in `events`.
  index:  HashMap<String, usize>,
}

impl EventRegistry {
  /// Build a registry from `events`, keeping their order.
  ///
  /// Fails on an empty event id or on two events sharing an id. The
  /// one-current-event invariant is not checked here; see
  /// [`EventRegistry::current_event`].
  pub fn new(events: impl IntoIterator<Item = Event>) -> Result<Self> {
    let mut registry = Self::default();
    for event in events {
      if event.event_id.is_empty() {
        return Err(Error::EmptyEventId);
      }
      if registry.index.contains_key(&event.event_id) {
        return Err(Error::DuplicateEvent(event.event_id));
      }
      registry
        .index
        .insert(event.event_id.clone(), registry.events.len());
      registry.events.push(event);
    }
    Ok(registry)
  }

  /// The event currently accepting registration.
  ///
  /// Scans in registry order and returns the first `current` event. If the
  /// catalog marks several events current, the first one wins.
  pub fn current_event(&self) -> Result<&Event> {
    self
      .events
      .iter()
      .find(|e| e.status == EventStatus::Current)
      .ok_or(Error::NoCurrentEvent)
  }

  /// Keyed lookup. `None` for an unknown id.
  pub fn event_by_id(&self, event_id: &str) -> Option<&Event> {
    self.index.get(event_id).map(|&i| &self.events[i])
  }

  /// All archived events, in registry order.
  pub fn archived_events(&self) -> Vec<&Event> {
    self.events.iter().filter(|e| e.is_archived()).collect()
  }

  /// The archived event with the highest event number.
  pub fn latest_archived_event(&self) -> Option<&Event> {
    self
      .events
      .iter()
      .filter(|e| e.is_archived())
      .max_by_key(|e| e.event_number)
  }

  /// Every event, in registry order.
  pub fn events(&self) -> impl Iterator<Item = &Event> { self.events.iter() }

  pub fn len(&self) -> usize { self.events.len() }

  pub fn is_empty(&self) -> bool { self.events.is_empty() }
}
