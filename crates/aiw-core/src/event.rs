//! Event types: one record per instance of the workshop.
//!
//! Everything here is plain data fixed at registry construction. Nothing is
//! created, updated or deleted while the site is running.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where an event sits in its lifecycle.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
  Upcoming,
  /// Accepting registration now. Exactly one event should carry this status.
  Current,
  /// A past event; its pages live under `/events/{id}/`.
  Archived,
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Category a submitted topic is filed under.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum TopicCategory {
  #[serde(rename = "Technical Protocols")]
  #[strum(serialize = "Technical Protocols")]
  TechnicalProtocols,
  #[serde(rename = "Policy & Governance")]
  #[strum(serialize = "Policy & Governance")]
  PolicyGovernance,
  #[serde(rename = "Use Cases")]
  #[strum(serialize = "Use Cases")]
  UseCases,
  #[serde(rename = "Identity & Privacy")]
  #[strum(serialize = "Identity & Privacy")]
  IdentityPrivacy,
  #[serde(rename = "Agent Coordination")]
  #[strum(serialize = "Agent Coordination")]
  AgentCoordination,
  #[serde(rename = "Human-AI Interaction")]
  #[strum(serialize = "Human-AI Interaction")]
  HumanAiInteraction,
  Other,
}

/// Sponsorship package. The food and venue tiers name what the sponsor pays
/// for rather than a rank.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum SponsorTier {
  Diamond,
  Platinum,
  Gold,
  Silver,
  Bronze,
  Coffee,
  #[serde(rename = "Snack Table")]
  #[strum(serialize = "Snack Table")]
  SnackTable,
  Breakfast,
  Lunch,
  Barista,
  WiFi,
  #[serde(rename = "Open Gifting")]
  #[strum(serialize = "Open Gifting")]
  OpenGifting,
  #[serde(rename = "Documentation Center")]
  #[strum(serialize = "Documentation Center")]
  DocumentationCenter,
  #[serde(rename = "Qiqochat Workshop Hub")]
  #[strum(serialize = "Qiqochat Workshop Hub")]
  QiqochatWorkshopHub,
}

/// Kind of slot on the day's schedule.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum SessionType {
  Opening,
  Keynote,
  Discussion,
  Workshop,
  Break,
  Lunch,
  Closing,
}

// ─── Venue ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
  pub name:     String,
  pub address:  String,
  pub city:     String,
  pub state:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub zip_code: Option<String>,
  /// Embeddable map URL, linked as-is.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub map_url:  Option<String>,
}

impl Location {
  /// `"City, ST 12345"`, or `"City, ST"` without a zip code.
  pub fn locality(&self) -> String {
    match &self.zip_code {
      Some(zip) => format!("{}, {} {}", self.city, self.state, zip),
      None => format!("{}, {}", self.city, self.state),
    }
  }
}

// ─── Registration ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
  /// Third-party ticketing page; linked, never integrated.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registration_url:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact_email:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub capacity:             Option<u32>,
  #[serde(default)]
  pub is_registration_open: bool,
}

// ─── Content ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
  pub id:              String,
  pub title:           String,
  pub description:     String,
  pub category:        TopicCategory,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub proposed_by:     Option<String>,
  /// Event the topic was originally submitted for, when carried over.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_event_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub linkedin: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub twitter:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub github:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
  pub id:           String,
  pub name:         String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub affiliation:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bio:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_url:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub social_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
  pub id:           String,
  pub name:         String,
  pub tier:         SponsorTier,
  pub logo_url:     String,
  pub website_url:  String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description:  Option<String>,
  /// `is_sold` and `is_available` are independent flags; both may be set.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_sold:      Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_available: Option<bool>,
}

impl Sponsor {
  /// An open sponsorship slot, shown as a placeholder card instead of a logo.
  pub fn is_placeholder(&self) -> bool { self.logo_url.contains("placeholder") }

  /// Badges shown on the sponsor card, `SOLD` before `AVAILABLE`.
  pub fn badges(&self) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if self.is_sold.unwrap_or(false) {
      badges.push("SOLD");
    }
    if self.is_available.unwrap_or(false) {
      badges.push("AVAILABLE");
    }
    badges
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
  pub id:           String,
  /// `HH:MM`, kept as written in the catalog.
  pub start_time:   String,
  pub end_time:     String,
  pub title:        String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description:  Option<String>,
  pub session_type: SessionType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub facilitator:  Option<String>,
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// One instance of the workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub event_id:               String,
  /// Sequence number shown as `AIW #n`.
  pub event_number:           u32,
  /// Human-readable date, e.g. `"October 24, 2025"`.
  pub date:                   String,
  pub date_iso:               NaiveDate,
  pub location:               Location,
  pub status:                 EventStatus,
  #[serde(default)]
  pub topics:                 Vec<Topic>,
  #[serde(default)]
  pub attendees:              Vec<Attendee>,
  #[serde(default)]
  pub sponsors:               Vec<Sponsor>,
  #[serde(default)]
  pub schedule:               Vec<ScheduleItem>,
  pub details:                EventDetails,
  /// Event whose topic list this event's topics were copied from.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_sourced_from:        Option<String>,
  /// Head count to advertise when the roster lists organisations rather
  /// than people.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub approximate_attendance: Option<u32>,
}

impl Event {
  pub fn is_current(&self) -> bool { self.status == EventStatus::Current }

  pub fn is_archived(&self) -> bool { self.status == EventStatus::Archived }

  /// `"AIW #n"`.
  pub fn short_name(&self) -> String { format!("AIW #{}", self.event_number) }
}
