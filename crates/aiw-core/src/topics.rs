//! Topic grouping and topic provenance.

use serde::Serialize;

use crate::{
  event::{Event, Topic, TopicCategory},
  registry::EventRegistry,
};

/// Topics sharing a category, in the order they appear in the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicGroup<'a> {
  pub category: TopicCategory,
  pub topics:   Vec<&'a Topic>,
}

/// Group `topics` by category. Groups are ordered by the first appearance of
/// their category.
pub fn group_by_category(topics: &[Topic]) -> Vec<TopicGroup<'_>> {
  let mut groups: Vec<TopicGroup<'_>> = Vec::new();
  for topic in topics {
    match groups.iter_mut().find(|g| g.category == topic.category) {
      Some(group) => group.topics.push(topic),
      None => groups.push(TopicGroup {
        category: topic.category,
        topics:   vec![topic],
      }),
    }
  }
  groups
}

/// Shown above a topic list that was carried over from another event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSourceNotice {
  pub source_event_id:     String,
  pub source_event_number: u32,
  pub event_number:        u32,
  pub message:             String,
}

/// `None` unless `event.is_sourced_from` names an event in `registry`.
pub fn topic_source_notice(
  registry: &EventRegistry,
  event: &Event,
) -> Option<TopicSourceNotice> {
  let source = registry.event_by_id(event.is_sourced_from.as_deref()?)?;
  Some(TopicSourceNotice {
    source_event_id:     source.event_id.clone(),
    source_event_number: source.event_number,
    event_number:        event.event_number,
    message:             format!(
      "Topics shown below are sourced from {}. New topic submissions for {} \
       will be appearing as the event approaches.",
      source.short_name(),
      event.short_name()
    ),
  })
}
