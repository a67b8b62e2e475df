//! Coordinate to IANA timezone resolution.
//!
//! Backed by tzf-rs's embedded timezone polygons, so the lookup is offline
//! and total: coordinates outside every polygon, and names chrono-tz does
//! not know, fall back to UTC.

use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

/// Offline `(lat, lon)` to [`Tz`] lookup.
pub struct TimezoneResolver {
  finder: DefaultFinder,
}

impl TimezoneResolver {
  /// Parse the embedded polygon data. Not free; build once and share.
  pub fn new() -> Self {
    Self { finder: DefaultFinder::new() }
  }

  /// The IANA timezone containing `(lat, lon)`, or UTC when none does.
  pub fn resolve(&self, lat: f64, lon: f64) -> Tz {
    let name = self.finder.get_tz_name(lon, lat);
    if name.is_empty() {
      tracing::warn!(lat, lon, "no timezone polygon, falling back to UTC");
      return Tz::UTC;
    }
    name.parse().unwrap_or(Tz::UTC)
  }
}

impl Default for TimezoneResolver {
  fn default() -> Self {
    Self::new()
  }
}
