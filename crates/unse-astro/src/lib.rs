//! # unse-astro
//!
//! Western-astrology side of the engine: a pure-Rust analytic ephemeris
//! behind [`unse_core::traits::EphemerisBackend`], the adapter that guards
//! it, a static timezone database, house cusps, chart construction, and
//! aspect classification.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod houses;
pub mod julian;
pub mod lunar;
pub mod planets;
pub mod search;
pub mod sidereal;
pub mod solar;
pub mod timezone;

pub use aspects::{cross_aspects, get_aspect};
pub use chart::TransitChartBuilder;
pub use ephemeris::{AnalyticEphemeris, EphemerisAdapter, SerializedEphemeris};
pub use houses::{compute_houses, house_of, HouseCusps};
pub use timezone::StaticTimezoneDb;
