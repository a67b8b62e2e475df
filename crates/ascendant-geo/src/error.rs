//! Error types for `ascendant-geo`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("place not found, try a more specific query")]
  PlaceNotFound,

  #[error("geocoding service unavailable: {0}")]
  ServiceUnavailable(String),

  #[error("failed to build http client: {0}")]
  ClientBuild(#[source] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
