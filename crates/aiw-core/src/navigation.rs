//! Navigation and notice view models shared by every page.
//!
//! Each function takes the [`EventContext`] it renders for, plus the registry
//! when it needs to see other events.

use serde::Serialize;

use crate::{
  Result,
  context::EventContext,
  event::Event,
  page::Page,
  registry::EventRegistry,
};

pub const SITE_NAME: &str = "Agentic Internet Workshop";

// ─── Event tabs ──────────────────────────────────────────────────────────────

/// One tab in the event switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTab {
  pub event_id:   String,
  pub label:      String,
  /// `"Current"` or `"Archive"`.
  pub badge:      &'static str,
  pub aria_label: String,
  pub href:       String,
  pub selected:   bool,
}

/// The current event's tab followed by one tab per archived event.
///
/// Tab hrefs are absolute site paths and are not rewritten by the context.
pub fn event_tabs(
  registry: &EventRegistry,
  ctx: &EventContext<'_>,
) -> Result<Vec<NavTab>> {
  let current = registry.current_event()?;

  let mut tabs = vec![NavTab {
    event_id:   current.event_id.clone(),
    label:      current.short_name(),
    badge:      "Current",
    aria_label: format!("{} (Current Event)", current.short_name()),
    href:       "/".to_owned(),
    selected:   !ctx.is_archived,
  }];

  tabs.extend(registry.archived_events().into_iter().map(|event| NavTab {
    event_id:   event.event_id.clone(),
    label:      event.short_name(),
    badge:      "Archive",
    aria_label: format!("{} (Archived)", event.short_name()),
    href:       format!("/events/{}", event.event_id),
    selected:   ctx.requested_id.as_deref() == Some(event.event_id.as_str()),
  }));

  Ok(tabs)
}

// ─── Site header ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLink {
  pub label:  &'static str,
  pub href:   String,
  pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteHeader {
  /// `"Agentic Internet Workshop"`, with ` #n` appended on archived events.
  pub brand:       String,
  pub brand_href:  String,
  pub archived:    bool,
  pub links:       Vec<HeaderLink>,
  pub tickets_url: Option<String>,
}

pub fn site_header(ctx: &EventContext<'_>, active: Page) -> SiteHeader {
  let brand = if ctx.is_archived {
    format!("{SITE_NAME} #{}", ctx.event.event_number)
  } else {
    SITE_NAME.to_owned()
  };

  // Section anchors on the home page sit between the page links.
  let entries: [(&'static str, &str, Option<Page>); 6] = [
    ("About", "#about", Some(Page::Home)),
    ("Details", "/details", Some(Page::Details)),
    ("Topics", "/topics", Some(Page::Topics)),
    ("Who's Coming", "/whos-coming", Some(Page::WhosComing)),
    ("Register", "#register", None),
    ("Sponsors", "#sponsors", None),
  ];

  let links = entries
    .into_iter()
    .map(|(label, href, page)| HeaderLink {
      label,
      href: ctx.link(href),
      active: page == Some(active),
    })
    .collect();

  SiteHeader {
    brand,
    brand_href: ctx.link("/"),
    archived: ctx.is_archived,
    links,
    tickets_url: ctx.event.details.registration_url.clone(),
  }
}

// ─── Notices ─────────────────────────────────────────────────────────────────

/// Banner shown on every page of an archived event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivedNotice {
  pub event_number: u32,
  pub date:         String,
  pub message:      String,
  pub current_href: &'static str,
}

pub fn archived_notice(ctx: &EventContext<'_>) -> Option<ArchivedNotice> {
  if !ctx.is_archived {
    return None;
  }
  let event = ctx.event;
  Some(ArchivedNotice {
    event_number: event.event_number,
    date:         event.date.clone(),
    message:      format!(
      "You are viewing archived content from {} ({}).",
      event.short_name(),
      event.date
    ),
    current_href: "/",
  })
}

// ─── Previous events ─────────────────────────────────────────────────────────

/// Card linking to an archived event from the current event's home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
  pub event_id:       String,
  pub event_number:   u32,
  pub href:           String,
  pub date:           String,
  pub location_name:  String,
  /// `"~125 Attendees"` or `"42 Attendees"`; absent with an empty roster.
  pub attendee_label: Option<String>,
}

impl EventCard {
  pub fn from_event(event: &Event) -> Self {
    let attendee_label = (!event.attendees.is_empty()).then(|| {
      match event.approximate_attendance {
        Some(n) => format!("~{n} Attendees"),
        None => format!("{} Attendees", event.attendees.len()),
      }
    });

    Self {
      event_id: event.event_id.clone(),
      event_number: event.event_number,
      href: format!("/events/{}", event.event_id),
      date: event.date.clone(),
      location_name: event.location.name.clone(),
      attendee_label,
    }
  }
}

pub fn previous_event_cards(registry: &EventRegistry) -> Vec<EventCard> {
  registry
    .archived_events()
    .into_iter()
    .map(EventCard::from_event)
    .collect()
}

// ─── Who's coming ────────────────────────────────────────────────────────────

/// Shown in place of the roster while it is still empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhosComingEmptyState {
  pub event_number:          u32,
  /// Roster of the most recent archived event, if there is one.
  pub previous_href:         Option<String>,
  pub previous_event_number: Option<u32>,
}

pub fn whos_coming_empty_state(
  registry: &EventRegistry,
  ctx: &EventContext<'_>,
) -> Option<WhosComingEmptyState> {
  if !ctx.event.attendees.is_empty() {
    return None;
  }
  let previous = registry
    .latest_archived_event()
    .filter(|e| e.event_id != ctx.event.event_id);

  Some(WhosComingEmptyState {
    event_number:          ctx.event.event_number,
    previous_href:         previous
      .map(|e| format!("/events/{}/{}", e.event_id, Page::WhosComing.slug())),
    previous_event_number: previous.map(|e| e.event_number),
  })
}
