//! Catalog decoding.
//!
//! A catalog is a single document holding an ordered `events` list. JSON and
//! TOML carry the same shape:
//!
//! ```toml
//! [[events]]
//! event_id = "1"
//! event_number = 1
//! date = "October 24, 2025"
//! date_iso = "2025-10-24"   # quoted; bare TOML dates are not accepted
//! status = "archived"
//! # ...
//! ```

use std::path::Path;

use aiw_core::event::Event;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
  pub events: Vec<Event>,
}

/// On-disk encoding of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Json,
  Toml,
}

impl Format {
  /// Pick the format from the file extension (case-insensitive).
  pub fn from_path(path: &Path) -> Result<Self> {
    let ext = path
      .extension()
      .and_then(|e| e.to_str())
      .map(str::to_ascii_lowercase);
    match ext.as_deref() {
      Some("json") => Ok(Self::Json),
      Some("toml") => Ok(Self::Toml),
      _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
  }
}

pub(crate) fn decode(input: &str, format: Format) -> Result<Vec<Event>> {
  let file: CatalogFile = match format {
    Format::Json => serde_json::from_str(input)?,
    Format::Toml => toml::from_str(input)?,
  };
  Ok(file.events)
}
