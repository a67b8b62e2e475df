//! HTTP layer for the ascendant resolver.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/ascendant` | Body: `{"date","time"?,"placeText","unknownTime"?}` |
//! | `OPTIONS` | `/api/ascendant` | CORS preflight, answered by the CORS layer |
//! | `GET` | `/healthz` | Liveness probe |
//!
//! The handler is a thin boundary: transport request in, resolver
//! orchestration, transport response out. All domain decisions live in
//! `ascendant-core` and `ascendant-geo`.

pub mod error;
pub mod resolve;

pub use error::ApiError;

use std::sync::Arc;

use ascendant_geo::{Geocoder, TimezoneResolver};
use axum::{
  Router,
  http::{Method, header},
  routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` merged with
/// `ASCENDANT_*` environment variables. Every field has a default so the
/// server runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// Nominatim-compatible geocoding endpoint.
  pub geocoder_url: String,
  /// Identifying User-Agent sent with every geocoding request.
  pub user_agent:   String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:         "127.0.0.1".to_string(),
      port:         8080,
      geocoder_url: "https://nominatim.openstreetmap.org".to_string(),
      user_agent:   "ascendant-resolver/0.1 (contact: admin@example.com)"
        .to_string(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. Immutable after startup;
/// nothing is shared mutably between requests.
#[derive(Clone)]
pub struct AppState {
  pub geocoder:  Arc<Geocoder>,
  pub timezones: Arc<TimezoneResolver>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`], including the permissive CORS layer the
/// browser frontend relies on.
pub fn router(state: AppState) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE]);

  Router::new()
    .route("/api/ascendant", post(resolve::handler))
    .route("/healthz", get(healthz))
    .layer(cors)
    .with_state(state)
}

async fn healthz() -> &'static str {
  "ok"
}

// ─── Integration tests ────────────────────────────────────────────────────────
