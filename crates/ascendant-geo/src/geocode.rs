//! Nominatim geocoder adapter.
//!
//! One `search?format=jsonv2&limit=1` request per lookup, identified by a
//! `User-Agent` string as Nominatim's usage policy requires. A single
//! attempt with a fixed 20-second upper bound; any failure surfaces
//! immediately to the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Upper bound on one geocoding round trip.
pub const GEOCODE_TIMEOUT: Duration = Duration::from_secs(20);

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
  pub lat: f64,
  pub lon: f64,
}

/// Nominatim serialises coordinates as JSON strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
  lat: String,
  lon: String,
}

/// Place-text to coordinate lookup against a Nominatim endpoint.
#[derive(Debug, Clone)]
pub struct Geocoder {
  client:   reqwest::Client,
  base_url: String,
}

impl Geocoder {
  /// Build a geocoder against `base_url`
  /// (e.g. `https://nominatim.openstreetmap.org`).
  pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(user_agent)
      .timeout(GEOCODE_TIMEOUT)
      .build()
      .map_err(Error::ClientBuild)?;
    Ok(Self { client, base_url: base_url.into() })
  }

  /// Resolve `place_text` to the first matching coordinate.
  pub async fn lookup(&self, place_text: &str) -> Result<GeoPoint> {
    let url = format!("{}/search", self.base_url.trim_end_matches('/'));
    let response = self
      .client
      .get(&url)
      .query(&[("format", "jsonv2"), ("limit", "1"), ("q", place_text)])
      .send()
      .await
      .map_err(|e| Error::ServiceUnavailable(e.to_string()))?;

    if !response.status().is_success() {
      return Err(Error::ServiceUnavailable(format!(
        "geocoder returned {}",
        response.status()
      )));
    }

    let places: Vec<NominatimPlace> = response
      .json()
      .await
      .map_err(|e| Error::ServiceUnavailable(e.to_string()))?;

    let first = places.into_iter().next().ok_or(Error::PlaceNotFound)?;
    let point = GeoPoint {
      lat: parse_coordinate(&first.lat)?,
      lon: parse_coordinate(&first.lon)?,
    };
    tracing::debug!(place_text, lat = point.lat, lon = point.lon, "geocoded");
    Ok(point)
  }
}

fn parse_coordinate(raw: &str) -> Result<f64> {
  raw.parse::<f64>().map_err(|_| {
    Error::ServiceUnavailable(format!("unparseable coordinate {raw:?}"))
  })
}

#[cfg(test)]
mod tests {
  use httpmock::prelude::*;

  use super::*;

  fn geocoder(server: &MockServer) -> Geocoder {
    Geocoder::new(server.base_url(), "ascendant-resolver-tests").unwrap()
  }

  #[tokio::test]
  async fn first_result_is_returned_as_a_point() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
      when
        .method(GET)
        .path("/search")
        .query_param("format", "jsonv2")
        .query_param("limit", "1")
        .query_param("q", "Sofia, Bulgaria");
      then.status(200).json_body(serde_json::json!([
        { "lat": "42.6977", "lon": "23.3219", "name": "София" },
        { "lat": "0.0", "lon": "0.0", "name": "decoy" }
      ]));
    });

    let point =
      geocoder(&server).lookup("Sofia, Bulgaria").await.unwrap();
    mock.assert();
    assert!((point.lat - 42.6977).abs() < 1e-9);
    assert!((point.lon - 23.3219).abs() < 1e-9);
  }

  #[tokio::test]
  async fn empty_result_set_is_place_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
      when.method(GET).path("/search");
      then.status(200).json_body(serde_json::json!([]));
    });

    let err = geocoder(&server).lookup("xzqw nowhere").await.unwrap_err();
    assert!(matches!(err, Error::PlaceNotFound));
  }

  #[tokio::test]
  async fn upstream_failure_is_service_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
      when.method(GET).path("/search");
      then.status(503);
    });

    let err = geocoder(&server).lookup("Sofia").await.unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable(_)));
  }

  #[tokio::test]
  async fn garbage_payload_is_service_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
      when.method(GET).path("/search");
      then.status(200).body("<html>not json</html>");
    });

    let err = geocoder(&server).lookup("Sofia").await.unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable(_)));
  }
}
