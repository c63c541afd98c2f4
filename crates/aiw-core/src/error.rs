//! Error types for `aiw-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("no current event found")]
  NoCurrentEvent,

  #[error("event not found: {0}")]
  EventNotFound(String),

  #[error("duplicate event id: {0}")]
  DuplicateEvent(String),

  #[error("event id must not be empty")]
  EmptyEventId,
}

impl Error {
  /// Whether this error names a specific event that does not exist, as
  /// opposed to a registry that is missing its current event.
  pub fn is_not_found(&self) -> bool { matches!(self, Self::EventNotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
