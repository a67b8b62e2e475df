//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is serialised to a uniform `{"error": message}` body; the
//! status code is the only transport-specific part. Raw messages are
//! surfaced as-is.

use ascendant_core::Error as CoreError;
use ascendant_geo::Error as GeoError;
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Geo(#[from] GeoError),

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::MissingField(_) | ApiError::BadRequest(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::Geo(GeoError::PlaceNotFound) => StatusCode::NOT_FOUND,
      ApiError::Geo(_) => StatusCode::BAD_GATEWAY,
      ApiError::Core(CoreError::Computation(_)) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
      ApiError::Core(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
