//! aiw-site server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds the event
//! registry from the configured catalog, and serves the site over HTTP.
//!
//! ```text
//! aiw-site                   # serve
//! aiw-site routes            # print the export route manifest
//! aiw-site check             # validate the catalog and exit
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use aiw_site::{AppState, ServerConfig, routes};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Agentic Internet Workshop site server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the site (the default).
  Serve,
  /// Print every route the static export must produce.
  Routes {
    /// Omit the site base path.
    #[arg(long)]
    relative: bool,
  },
  /// Load and validate the catalog, failing on any warning.
  Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("AIW"))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  server_cfg.catalog_path = server_cfg.catalog_path.as_deref().map(expand_tilde);

  // Build the registry.
  let loaded = server_cfg.load_catalog().with_context(|| {
    match &server_cfg.catalog_path {
      Some(path) => format!("failed to load catalog at {path:?}"),
      None => "failed to load built-in catalog".to_string(),
    }
  })?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Check => {
      for warning in &loaded.warnings {
        println!("warning: {warning}");
      }
      if !loaded.warnings.is_empty() {
        anyhow::bail!("catalog has {} warning(s)", loaded.warnings.len());
      }
      println!("catalog ok: {} events", loaded.registry.len());
      Ok(())
    }
    Command::Routes { relative } => {
      for route in routes::manifest(&loaded.registry) {
        if relative {
          println!("{}", route.path);
        } else {
          println!(
            "{}",
            routes::with_site_base(&server_cfg.site_base_path, &route.path)
          );
        }
      }
      Ok(())
    }
    Command::Serve => serve(server_cfg, loaded.registry).await,
  }
}

async fn serve(
  server_cfg: ServerConfig,
  registry: aiw_core::EventRegistry,
) -> anyhow::Result<()> {
  let state = AppState { registry: Arc::new(registry) };

  let app = aiw_site::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
