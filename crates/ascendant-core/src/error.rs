//! Error types for `ascendant-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid date {0:?}: expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("invalid time {0:?}: expected HH:MM")]
  InvalidTime(String),

  #[error("local time {time} does not exist in timezone {timezone}")]
  NonexistentLocalTime { time: String, timezone: String },

  #[error("ascendant computation failed: {0}")]
  Computation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
