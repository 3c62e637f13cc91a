use std::time::Duration;

use crate::errors::CacheError;

/// External key/value cache for computed year calendars.
///
/// The engine treats every error from this trait as a cache miss.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
}
