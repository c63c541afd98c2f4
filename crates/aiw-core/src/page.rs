//! The page set every event exposes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
  Home,
  Details,
  Topics,
  WhosComing,
}

impl Page {
  /// Path segment under the event root; empty for the home page.
  pub fn slug(self) -> &'static str {
    match self {
      Self::Home => "",
      Self::Details => "details",
      Self::Topics => "topics",
      Self::WhosComing => "whos-coming",
    }
  }

  /// Page for a path segment. The home page has no segment of its own.
  pub fn from_slug(slug: &str) -> Option<Self> {
    match slug {
      "details" => Some(Self::Details),
      "topics" => Some(Self::Topics),
      "whos-coming" => Some(Self::WhosComing),
      _ => None,
    }
  }

  /// Site-relative path without a trailing slash, e.g. `/topics`.
  pub fn href(self) -> String { format!("/{}", self.slug()) }

  pub fn title(self) -> &'static str {
    match self {
      Self::Home => "About",
      Self::Details => "Details",
      Self::Topics => "Topics",
      Self::WhosComing => "Who's Coming",
    }
  }
}
