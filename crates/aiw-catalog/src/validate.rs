//! Consistency checks that do not stop a catalog from loading.
//!
//! Hard errors (empty or duplicate ids) are raised by
//! [`EventRegistry::new`](aiw_core::EventRegistry::new); everything here is
//! reported and logged, and the catalog is still served.

use std::{collections::HashSet, fmt};

use aiw_core::event::{Event, EventStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
  /// Current-event pages and the event tabs will fail.
  NoCurrentEvent,
  /// Only the first of these is ever treated as current.
  MultipleCurrentEvents(Vec<String>),
  /// `is_sourced_from` names an event that is not in the catalog; the topic
  /// source notice is not shown.
  UnknownTopicSource { event_id: String, source: String },
  /// A topic's `source_event_id` names an event that is not in the catalog.
  UnknownTopicOrigin {
    event_id: String,
    topic_id: String,
    source:   String,
  },
}

impl fmt::Display for Warning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoCurrentEvent => write!(f, "no event has status \"current\""),
      Self::MultipleCurrentEvents(ids) => write!(
        f,
        "several events have status \"current\" ({}); only {} is used",
        ids.join(", "),
        ids[0]
      ),
      Self::UnknownTopicSource { event_id, source } => write!(
        f,
        "event {event_id} sources its topics from unknown event {source}"
      ),
      Self::UnknownTopicOrigin { event_id, topic_id, source } => write!(
        f,
        "topic {topic_id} of event {event_id} names unknown source event \
         {source}"
      ),
    }
  }
}

pub fn validate(events: &[Event]) -> Vec<Warning> {
  let mut warnings = Vec::new();

  let current: Vec<String> = events
    .iter()
    .filter(|e| e.status == EventStatus::Current)
    .map(|e| e.event_id.clone())
    .collect();
  match current.len() {
    0 => warnings.push(Warning::NoCurrentEvent),
    1 => {}
    _ => warnings.push(Warning::MultipleCurrentEvents(current)),
  }

  let known: HashSet<&str> =
    events.iter().map(|e| e.event_id.as_str()).collect();

  for event in events {
    if let Some(source) = &event.is_sourced_from
      && !known.contains(source.as_str())
    {
      warnings.push(Warning::UnknownTopicSource {
        event_id: event.event_id.clone(),
        source:   source.clone(),
      });
    }

    for topic in &event.topics {
      if let Some(source) = &topic.source_event_id
        && !known.contains(source.as_str())
      {
        warnings.push(Warning::UnknownTopicOrigin {
          event_id: event.event_id.clone(),
          topic_id: topic.id.clone(),
          source:   source.clone(),
        });
      }
    }
  }

  warnings
}
