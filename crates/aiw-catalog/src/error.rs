use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read catalog {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid JSON catalog: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid TOML catalog: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("unsupported catalog format: {0:?} (expected .json or .toml)")]
  UnsupportedFormat(PathBuf),

  #[error(transparent)]
  Registry(#[from] aiw_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
