//! External lookup adapters for the ascendant resolver.
//!
//! Two concerns live here: free-form place text to coordinates (Nominatim
//! over HTTP) and coordinates to an IANA timezone (embedded polygon data).
//! Everything in this crate is replaceable infrastructure; the domain logic
//! lives in `ascendant-core`.

pub mod error;
pub mod geocode;
pub mod timezone;

pub use error::{Error, Result};
pub use geocode::{GeoPoint, Geocoder};
pub use timezone::TimezoneResolver;
