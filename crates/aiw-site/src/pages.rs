//! Page view models.
//!
//! A [`PageView`] is everything one page of the site renders: the chrome
//! shared by every page (header, event tabs, archived notice) and the
//! page-specific content. Views borrow from the registry and are serialised
//! straight into the response.

use aiw_core::{
  EventContext, EventRegistry, Result,
  context::ContextSummary,
  event::{Attendee, Event, Location, ScheduleItem, Sponsor, SponsorTier},
  navigation::{
    ArchivedNotice, EventCard, NavTab, SiteHeader, WhosComingEmptyState,
    archived_notice, event_tabs, previous_event_cards, site_header,
    whos_coming_empty_state,
  },
  page::Page,
  topics::{TopicGroup, TopicSourceNotice, group_by_category, topic_source_notice},
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::routes::page_path;

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
  pub page:            Page,
  /// Canonical route, with trailing slash.
  pub route:           String,
  pub title:           String,
  pub context:         ContextSummary,
  pub header:          SiteHeader,
  pub tabs:            Vec<NavTab>,
  pub archived_notice: Option<ArchivedNotice>,
  pub content:         PageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PageContent<'a> {
  Home(HomeContent<'a>),
  Details(DetailsContent<'a>),
  Topics(TopicsContent<'a>),
  WhosComing(WhosComingContent<'a>),
}

// ─── Shared pieces ───────────────────────────────────────────────────────────

/// What the registration block (and the external QR encoder) needs.
#[derive(Debug, Serialize)]
pub struct Registration<'a> {
  pub url:           Option<&'a str>,
  pub is_open:       bool,
  pub capacity:      Option<u32>,
  pub contact_email: Option<&'a str>,
}

impl<'a> Registration<'a> {
  fn of(event: &'a Event) -> Self {
    Self {
      url:           event.details.registration_url.as_deref(),
      is_open:       event.details.is_registration_open,
      capacity:      event.details.capacity,
      contact_email: event.details.contact_email.as_deref(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct SponsorCard<'a> {
  pub name:        &'a str,
  pub tier:        SponsorTier,
  /// `None` for open slots, which render as placeholders.
  pub logo_url:    Option<&'a str>,
  pub website_url: &'a str,
  pub description: Option<&'a str>,
  pub placeholder: bool,
  pub badges:      Vec<&'static str>,
}

impl<'a> From<&'a Sponsor> for SponsorCard<'a> {
  fn from(s: &'a Sponsor) -> Self {
    let placeholder = s.is_placeholder();
    Self {
      name: &s.name,
      tier: s.tier,
      logo_url: (!placeholder).then_some(s.logo_url.as_str()),
      website_url: &s.website_url,
      description: s.description.as_deref(),
      placeholder,
      badges: s.badges(),
    }
  }
}

// ─── Page content ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HomeContent<'a> {
  pub event_number:    u32,
  pub date:            &'a str,
  pub location:        &'a Location,
  pub registration:    Registration<'a>,
  pub schedule:        &'a [ScheduleItem],
  pub sponsors:        Vec<SponsorCard<'a>>,
  /// Only listed on the current event's home page.
  pub previous_events: Vec<EventCard>,
}

#[derive(Debug, Serialize)]
pub struct DetailsContent<'a> {
  pub date:         &'a str,
  pub date_iso:     NaiveDate,
  pub location:     &'a Location,
  pub locality:     String,
  pub schedule:     &'a [ScheduleItem],
  pub registration: Registration<'a>,
}

#[derive(Debug, Serialize)]
pub struct TopicsContent<'a> {
  pub source_notice: Option<TopicSourceNotice>,
  pub groups:        Vec<TopicGroup<'a>>,
}

#[derive(Debug, Serialize)]
pub struct WhosComingContent<'a> {
  pub attendees:   &'a [Attendee],
  pub empty_state: Option<WhosComingEmptyState>,
}

// ─── Assembly ────────────────────────────────────────────────────────────────

/// Build the view for `page` as seen through `ctx`.
///
/// Fails only when the registry has no current event, which the event tabs
/// always need.
pub fn build<'a>(
  registry: &'a EventRegistry,
  ctx: &EventContext<'a>,
  page: Page,
) -> Result<PageView<'a>> {
  let event: &'a Event = ctx.event;

  let content = match page {
    Page::Home => PageContent::Home(HomeContent {
      event_number:    event.event_number,
      date:            &event.date,
      location:        &event.location,
      registration:    Registration::of(event),
      schedule:        &event.schedule,
      sponsors:        event.sponsors.iter().map(SponsorCard::from).collect(),
      previous_events: if ctx.is_archived {
        Vec::new()
      } else {
        previous_event_cards(registry)
      },
    }),
    Page::Details => PageContent::Details(DetailsContent {
      date:         &event.date,
      date_iso:     event.date_iso,
      location:     &event.location,
      locality:     event.location.locality(),
      schedule:     &event.schedule,
      registration: Registration::of(event),
    }),
    Page::Topics => PageContent::Topics(TopicsContent {
      source_notice: topic_source_notice(registry, event),
      groups:        group_by_category(&event.topics),
    }),
    Page::WhosComing => PageContent::WhosComing(WhosComingContent {
      attendees:   &event.attendees,
      empty_state: whos_coming_empty_state(registry, ctx),
    }),
  };

  let title = match page {
    Page::Home => event.short_name(),
    _ => format!("{} - {}", page.title(), event.short_name()),
  };

  Ok(PageView {
    page,
    route: page_path(&ctx.base_path, page),
    title,
    context: ctx.summary(),
    header: site_header(ctx, page),
    tabs: event_tabs(registry, ctx)?,
    archived_notice: archived_notice(ctx),
    content,
  })
}
