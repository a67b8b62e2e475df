//! Zodiac sign mapping.
//!
//! An ecliptic longitude is normalised into `[0, 360)` and divided into
//! twelve 30° signs in fixed cyclical order, Овен (Aries) through Риби
//! (Pisces). Total and deterministic; every input maps to exactly one sign.

use serde::{Deserialize, Serialize};

/// Bulgarian sign names, indexed by sign, starting at 0° Aries.
pub const SIGN_NAMES_BG: [&str; 12] = [
  "Овен",
  "Телец",
  "Близнаци",
  "Рак",
  "Лъв",
  "Дева",
  "Везни",
  "Скорпион",
  "Стрелец",
  "Козирог",
  "Водолей",
  "Риби",
];

/// One of the twelve zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
  Aries,
  Taurus,
  Gemini,
  Cancer,
  Leo,
  Virgo,
  Libra,
  Scorpio,
  Sagittarius,
  Capricorn,
  Aquarius,
  Pisces,
}

impl Sign {
  const ALL: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
  ];

  /// The sign occupying the `index`-th 30° segment of the zodiac.
  pub fn from_index(index: usize) -> Sign {
    Self::ALL[index % 12]
  }

  /// Position of this sign in zodiacal order, `0..12`.
  pub fn index(&self) -> usize {
    *self as usize
  }

  /// The Bulgarian name of this sign.
  pub fn name_bg(&self) -> &'static str {
    SIGN_NAMES_BG[self.index()]
  }
}

/// An ascendant point located within the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantPosition {
  /// Absolute ecliptic longitude, normalised to `[0, 360)`.
  pub longitude:      f64,
  pub sign:           Sign,
  /// Degrees past the sign cusp, in `[0, 30)`.
  pub degree_in_sign: f64,
}

/// Normalise an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(x: f64) -> f64 {
  ((x % 360.0) + 360.0) % 360.0
}

/// Locate an ecliptic longitude (degrees, any range) within the zodiac.
pub fn position_from_longitude(longitude: f64) -> AscendantPosition {
  let normalized = normalize_degrees(longitude);
  let sign_index = ((normalized / 30.0).floor() as usize) % 12;
  AscendantPosition {
    longitude:      normalized,
    sign:           Sign::from_index(sign_index),
    degree_in_sign: normalized - sign_index as f64 * 30.0,
  }
}
