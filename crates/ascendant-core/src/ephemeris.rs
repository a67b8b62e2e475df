//! Ascendant computation.
//!
//! The Julian day, Greenwich mean sidereal time, and mean obliquity of the
//! ecliptic are delegated to the `astro` crate. The ascendant itself is the
//! intersection of the ecliptic with the eastern horizon at the given
//! instant and place, equivalently the first Placidus house cusp.

use astro::time::{CalType, Date, DayOfMonth, decimal_day, julian_day, mn_sidr};
use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::{Error, Result, zodiac};

/// Julian day number for a UTC instant, to fractional-second precision.
fn julian_day_utc(utc: DateTime<Utc>) -> f64 {
  let day = DayOfMonth {
    day:       utc.day() as u8,
    hr:        utc.hour() as u8,
    min:       utc.minute() as u8,
    sec:       utc.second() as f64,
    time_zone: 0.0,
  };
  let date = Date {
    year:        utc.year() as i16,
    month:       utc.month() as u8,
    decimal_day: decimal_day(&day),
    cal_type:    CalType::Gregorian,
  };
  julian_day(&date)
}

/// Ecliptic longitude of the ascendant, in degrees `[0, 360)`, for a UTC
/// instant at geographic `lat`/`lon` (decimal degrees, east-positive).
pub fn ascendant_longitude(
  utc: DateTime<Utc>,
  lat: f64,
  lon: f64,
) -> Result<f64> {
  let jd = julian_day_utc(utc);

  // astro works in radians throughout.
  let gmst = mn_sidr(jd);
  let oblq = astro::ecliptic::mn_oblq_IAU(jd);

  // Local sidereal time at the east-positive longitude.
  let theta = gmst + lon.to_radians();
  let phi = lat.to_radians();

  let asc = theta
    .cos()
    .atan2(-(theta.sin() * oblq.cos() + phi.tan() * oblq.sin()));
  let degrees = zodiac::normalize_degrees(asc.to_degrees());

  if !degrees.is_finite() {
    return Err(Error::Computation(format!(
      "non-finite ascendant for lat={lat} lon={lon} jd={jd}"
    )));
  }
  Ok(degrees)
}
