//! ascendant-api server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`, merged with
//! `ASCENDANT_*` environment variables), builds the geocoder and the
//! timezone resolver once, and serves the API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use ascendant_api::{AppState, ServerConfig};
use ascendant_geo::{Geocoder, TimezoneResolver};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Ascendant resolver HTTP server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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

  // Load configuration; every field has a default, so a missing file is fine.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ASCENDANT"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let geocoder = Geocoder::new(&server_cfg.geocoder_url, &server_cfg.user_agent)
    .context("failed to build geocoder")?;

  tracing::info!("Loading timezone polygons");
  let timezones = TimezoneResolver::new();

  let state = AppState {
    geocoder:  Arc::new(geocoder),
    timezones: Arc::new(timezones),
  };

  let app = ascendant_api::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
