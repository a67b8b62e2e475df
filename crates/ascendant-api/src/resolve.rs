//! Handler for `POST /api/ascendant`.
//!
//! Orchestration is strictly sequential: validate the input, geocode the
//! place, resolve its timezone, pin the wall-clock birth time to UTC,
//! compute the ascendant, and map it onto the zodiac. One outbound HTTP
//! call (geocoding), everything else is offline.

use ascendant_core::{
  ephemeris,
  moment::{self, DEFAULT_TIME},
  zodiac,
};
use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Warning attached to the response when the birth time defaulted to noon.
const UNKNOWN_TIME_WARNING: &str = "Часът е неизвестен — използван е 12:00";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantRequest {
  pub date:         Option<String>,
  pub time:         Option<String>,
  pub place_text:   Option<String>,
  #[serde(default)]
  pub unknown_time: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantResponse {
  pub ok:                   bool,
  pub place:                String,
  pub lat:                  f64,
  pub lon:                  f64,
  pub timezone:             String,
  pub unknown_time:         bool,
  /// ISO-8601 with seconds precision and a trailing `Z`.
  pub utc_time:             String,
  pub asc_sign_bg:          &'static str,
  /// Absolute ecliptic longitude, rounded to two decimals.
  pub asc_degree:           f64,
  pub asc_degree_in_sign:   f64,
  pub asc_degree_formatted: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub warning:              Option<String>,
}

/// `POST /api/ascendant` — body: `{"date", "time"?, "placeText", "unknownTime"?}`
pub async fn handler(
  State(state): State<AppState>,
  body: Result<Json<AscendantRequest>, JsonRejection>,
) -> Result<Json<AscendantResponse>, ApiError> {
  let Json(request) =
    body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

  let date = request
    .date
    .as_deref()
    .filter(|s| !s.trim().is_empty())
    .ok_or(ApiError::MissingField("date"))?;
  let place = request
    .place_text
    .as_deref()
    .filter(|s| !s.trim().is_empty())
    .ok_or(ApiError::MissingField("placeText"))?;

  // Absent or explicitly unknown time falls back to noon.
  let time_defaulted = request.unknown_time || request.time.is_none();
  let time = if time_defaulted {
    DEFAULT_TIME
  } else {
    request.time.as_deref().unwrap_or(DEFAULT_TIME)
  };

  let point = state.geocoder.lookup(place).await?;
  let tz = state.timezones.resolve(point.lat, point.lon);
  let moment = moment::resolve_local(date, time, tz)?;
  let longitude =
    ephemeris::ascendant_longitude(moment.utc, point.lat, point.lon)?;
  let position = zodiac::position_from_longitude(longitude);

  tracing::info!(
    place,
    timezone = tz.name(),
    sign = position.sign.name_bg(),
    "resolved ascendant"
  );

  Ok(Json(AscendantResponse {
    ok:                   true,
    place:                place.to_string(),
    lat:                  point.lat,
    lon:                  point.lon,
    timezone:             tz.name().to_string(),
    unknown_time:         time_defaulted,
    utc_time:             moment.utc.to_rfc3339_opts(SecondsFormat::Secs, true),
    asc_sign_bg:          position.sign.name_bg(),
    asc_degree:           round2(position.longitude),
    asc_degree_in_sign:   round2(position.degree_in_sign),
    asc_degree_formatted: format!(
      "{} {:.2}°",
      position.sign.name_bg(),
      position.degree_in_sign
    ),
    warning:              time_defaulted
      .then(|| UNKNOWN_TIME_WARNING.to_string()),
  }))
}

fn round2(x: f64) -> f64 {
  (x * 100.0).round() / 100.0
}
