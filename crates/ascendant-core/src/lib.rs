//! Core domain logic for the ascendant resolver.
//!
//! Pure computation only: zodiac sign mapping, wall-clock to UTC moment
//! resolution, and the ascendant ephemeris call. This crate is deliberately
//! free of HTTP dependencies; the lookup adapters live in `ascendant-geo`
//! and the transport layer in `ascendant-api`.

pub mod ephemeris;
pub mod error;
pub mod moment;
pub mod zodiac;

pub use error::{Error, Result};
