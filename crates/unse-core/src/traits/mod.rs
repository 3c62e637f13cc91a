//! Seams to external collaborators: ephemeris, timezone database, cache.

pub mod cache_store;
pub mod ephemeris;
pub mod timezone;

pub use cache_store::CacheStore;
pub use ephemeris::EphemerisBackend;
pub use timezone::TimezoneDb;
