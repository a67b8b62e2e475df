//! Wall-clock to UTC moment resolution.
//!
//! A birth instant arrives as a calendar date and clock time meant in some
//! IANA timezone; the ephemeris wants UTC. Conversion honours the zone's
//! historical standard/daylight rules for that date.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{Error, Result};

/// Wall-clock time substituted when the birth time is unknown.
pub const DEFAULT_TIME: &str = "12:00";

/// A birth instant pinned to both its local zone and UTC.
///
/// Invariant: `utc` is exactly `local` expressed in UTC.
#[derive(Debug, Clone)]
pub struct ResolvedMoment {
  pub local: DateTime<Tz>,
  pub utc:   DateTime<Utc>,
}

/// Interpret `date` (`YYYY-MM-DD`) + `time` (`HH:MM`) as wall-clock time in
/// `tz` and convert to UTC.
///
/// An ambiguous local time (the repeated fall-back hour) resolves to the
/// earlier offset; a local time skipped by a spring-forward gap is an error.
pub fn resolve_local(date: &str, time: &str, tz: Tz) -> Result<ResolvedMoment> {
  let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
    .map_err(|_| Error::InvalidDate(date.to_string()))?;
  let time = NaiveTime::parse_from_str(time, "%H:%M")
    .map_err(|_| Error::InvalidTime(time.to_string()))?;
  let naive = date.and_time(time);

  let local = match tz.from_local_datetime(&naive) {
    LocalResult::Single(dt) => dt,
    LocalResult::Ambiguous(earlier, _) => earlier,
    LocalResult::None => {
      return Err(Error::NonexistentLocalTime {
        time:     naive.to_string(),
        timezone: tz.name().to_string(),
      });
    }
  };

  Ok(ResolvedMoment { utc: local.with_timezone(&Utc), local })
}
