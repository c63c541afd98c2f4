//! Event catalog loading for the Agentic Internet Workshop site.
//!
//! Builds an [`EventRegistry`] explicitly, either from a catalog file (JSON
//! or TOML) or from the dataset compiled into this crate. Loading validates
//! the catalog and logs every [`Warning`]; only malformed input and id
//! clashes are fatal.
//!
//! # Quick start
//!
//! ```no_run
//! let loaded = aiw_catalog::load("catalog.toml").unwrap();
//! println!("{} events", loaded.registry.len());
//! ```

pub mod error;
mod parse;
mod validate;

use std::path::Path;

use aiw_core::{EventRegistry, event::Event};

pub use error::{Error, Result};
pub use parse::{CatalogFile, Format};
pub use validate::{Warning, validate};

/// The built-in dataset: AIW #1 (archived) and AIW #2 (current).
pub const BUILTIN_CATALOG: &str = include_str!("../data/events.json");

/// A registry together with the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
  pub registry: EventRegistry,
  pub warnings: Vec<Warning>,
}

/// Decode a catalog document without building a registry.
pub fn parse(input: &str, format: Format) -> Result<Vec<Event>> {
  parse::decode(input, format)
}

/// Validate `events` and build a registry from them, logging each warning.
pub fn from_events(events: Vec<Event>) -> Result<LoadedCatalog> {
  let warnings = validate(&events);
  for warning in &warnings {
    tracing::warn!("catalog: {warning}");
  }
  let registry = EventRegistry::new(events)?;
  Ok(LoadedCatalog { registry, warnings })
}

/// Decode, validate and build a registry from a catalog document.
pub fn from_str(input: &str, format: Format) -> Result<LoadedCatalog> {
  from_events(parse(input, format)?)
}

/// Read a catalog file; the format follows the extension.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedCatalog> {
  let path = path.as_ref();
  let format = Format::from_path(path)?;
  let input = std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let loaded = from_str(&input, format)?;
  tracing::info!(
    path = %path.display(),
    events = loaded.registry.len(),
    "loaded event catalog"
  );
  Ok(loaded)
}

/// The compiled-in catalog.
pub fn builtin() -> Result<LoadedCatalog> {
  from_str(BUILTIN_CATALOG, Format::Json)
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use aiw_core::{EventContext, event::EventStatus};

  use super::*;

  const TOML_CATALOG: &str = r#"
[[events]]
event_id = "1"
event_number = 1
date = "October 24, 2025"
date_iso = "2025-10-24"
status = "archived"
approximate_attendance = 125

[events.location]
name = "Computer History Museum"
address = "1401 N Shoreline Blvd"
city = "Mountain View"
state = "CA"

[events.details]
is_registration_open = false

[[events.sponsors]]
id = "sponsor-1"
name = "Glide Identity"
tier = "Snack Table"
logo_url = "/sponsors/glide.png"
website_url = "https://www.glideidentity.com"

[[events]]
event_id = "2"
event_number = 2
date = "May 1, 2026"
date_iso = "2026-05-01"
status = "current"
is_sourced_from = "1"

[events.location]
name = "Computer History Museum"
address = "1401 N Shoreline Blvd"
city = "Mountain View"
state = "CA"
zip_code = "94043"

[events.details]
registration_url = "https://tickets.example.com/aiw-2"
is_registration_open = true
"#;

  // ── Built-in dataset ───────────────────────────────────────────────────────

  #[test]
  fn builtin_catalog_loads_cleanly() {
    let loaded = builtin().unwrap();
    assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
    assert_eq!(loaded.registry.len(), 2);
  }

  #[test]
  fn builtin_current_event_is_aiw_2() {
    let registry = builtin().unwrap().registry;
    let current = registry.current_event().unwrap();
    assert_eq!(current.event_id, "2");
    assert_eq!(current.status, EventStatus::Current);
    assert!(current.attendees.is_empty());
    assert!(current.sponsors.iter().all(|s| s.is_placeholder()));
  }

  #[test]
  fn builtin_archive_is_aiw_1() {
    let registry = builtin().unwrap().registry;
    let archived: Vec<_> = registry
      .archived_events()
      .iter()
      .map(|e| e.event_id.as_str())
      .collect();
    assert_eq!(archived, ["1"]);

    let aiw1 = registry.event_by_id("1").unwrap();
    assert_eq!(aiw1.topics.len(), 9);
    assert_eq!(aiw1.attendees.len(), 42);
    assert_eq!(aiw1.schedule.len(), 8);
    assert_eq!(aiw1.approximate_attendance, Some(125));
    assert_eq!(aiw1.date_iso.to_string(), "2025-10-24");
  }

  #[test]
  fn builtin_every_id_resolves_to_itself() {
    let registry = builtin().unwrap().registry;
    for event in registry.events() {
      let found = registry.event_by_id(&event.event_id).unwrap();
      assert_eq!(found.event_id, event.event_id);
    }
  }

  #[test]
  fn builtin_contexts() {
    let registry = builtin().unwrap().registry;

    let archived = EventContext::resolve(&registry, Some("1")).unwrap();
    assert!(archived.is_archived);
    assert_eq!(archived.base_path, "/events/1");

    let current = EventContext::resolve(&registry, None).unwrap();
    assert!(!current.is_archived);
    assert_eq!(current.base_path, "");
  }

  // ── Decoding ───────────────────────────────────────────────────────────────

  #[test]
  fn toml_catalog_decodes() {
    let loaded = from_str(TOML_CATALOG, Format::Toml).unwrap();
    assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
    let aiw2 = loaded.registry.current_event().unwrap();
    assert_eq!(aiw2.is_sourced_from.as_deref(), Some("1"));
    assert_eq!(aiw2.location.zip_code.as_deref(), Some("94043"));
    assert!(aiw2.details.is_registration_open);

    let aiw1 = loaded.registry.event_by_id("1").unwrap();
    assert_eq!(aiw1.sponsors[0].tier.to_string(), "Snack Table");
    assert!(aiw1.topics.is_empty());
  }

  #[test]
  fn json_round_trips_through_catalog_file() {
    let events = parse(BUILTIN_CATALOG, Format::Json).unwrap();
    let json = serde_json::to_string(&CatalogFile { events: events.clone() })
      .unwrap();
    assert_eq!(parse(&json, Format::Json).unwrap(), events);
  }

  #[test]
  fn unknown_tier_is_rejected() {
    let input = BUILTIN_CATALOG.replace("\"Barista\"", "\"Espresso\"");
    assert!(matches!(from_str(&input, Format::Json), Err(Error::Json(_))));
  }

  #[test]
  fn duplicate_ids_fail_to_load() {
    let input = BUILTIN_CATALOG.replace("\"event_id\": \"2\"", "\"event_id\": \"1\"");
    let err = from_str(&input, Format::Json).unwrap_err();
    assert!(
      matches!(err, Error::Registry(aiw_core::Error::DuplicateEvent(ref id)) if id == "1"),
      "{err}"
    );
  }

  // ── Files ──────────────────────────────────────────────────────────────────

  #[test]
  fn load_picks_format_from_extension() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(TOML_CATALOG.as_bytes()).unwrap();
    let loaded = load(file.path()).unwrap();
    assert_eq!(loaded.registry.len(), 2);
  }

  #[test]
  fn load_rejects_unknown_extension() {
    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(matches!(load(file.path()), Err(Error::UnsupportedFormat(_))));
  }

  #[test]
  fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
  }

  // ── Validation ─────────────────────────────────────────────────────────────

  #[test]
  fn validation_flags_current_event_count() {
    let mut events = parse(BUILTIN_CATALOG, Format::Json).unwrap();

    events[0].status = EventStatus::Current;
    assert_eq!(validate(&events), [Warning::MultipleCurrentEvents(vec![
      "1".into(),
      "2".into()
    ])]);

    events[0].status = EventStatus::Archived;
    events[1].status = EventStatus::Upcoming;
    assert_eq!(validate(&events), [Warning::NoCurrentEvent]);
  }

  #[test]
  fn validation_flags_unknown_sources() {
    let mut events = parse(BUILTIN_CATALOG, Format::Json).unwrap();
    events[1].is_sourced_from = Some("0".into());
    events[1].topics[0].source_event_id = Some("7".into());

    let warnings = validate(&events);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.contains(&Warning::UnknownTopicSource {
      event_id: "2".into(),
      source:   "0".into(),
    }));
    assert!(
      warnings[1].to_string().contains("topic-placeholder"),
      "{}",
      warnings[1]
    );
  }

  #[test]
  fn warnings_do_not_block_loading() {
    let input = BUILTIN_CATALOG.replace("\"current\"", "\"upcoming\"");
    let loaded = from_str(&input, Format::Json).unwrap();
    assert_eq!(loaded.warnings, [Warning::NoCurrentEvent]);
    assert_eq!(
      loaded.registry.current_event().unwrap_err(),
      aiw_core::Error::NoCurrentEvent
    );
  }
}
