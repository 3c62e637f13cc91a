//! Year-calendar cache.
//!
//! Two tiers: an in-process moka cache whose loader runs at most once per
//! key at a time, and an optional external [`CacheStore`]. External store
//! failures are logged and treated as misses.

use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::sync::Cache;
use tracing::{debug, warn};

use unse_core::config::CacheConfig;
use unse_core::constants::ENGINE_VERSION;
use unse_core::errors::{CacheError, EngineError, EngineResult, ErrorCode};
use unse_core::traits::CacheStore;

use crate::year::YearCalendar;

/// blake3 over fingerprint, year, engine version, and the
/// [`EngineConfig::output_digest`](unse_core::config::EngineConfig::output_digest)
/// of the computing engine, so a store shared by differently configured
/// engines never serves one engine's records to another.
pub fn cache_key(profile_fingerprint: &str, year: i32, config_digest: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(profile_fingerprint.as_bytes());
    hasher.update(&year.to_le_bytes());
    hasher.update(&ENGINE_VERSION.to_le_bytes());
    hasher.update(config_digest.as_bytes());
    hasher.finalize().to_hex().to_string()
}

pub struct YearCache {
    memory: Cache<String, Arc<YearCalendar>>,
    store: Option<Arc<dyn CacheStore>>,
    ttl: Duration,
}

impl YearCache {
    pub fn new(config: &CacheConfig, store: Option<Arc<dyn CacheStore>>) -> Self {
        let memory = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl())
            .build();
        Self {
            memory,
            store,
            ttl: config.ttl(),
        }
    }

    /// Cached calendar for `key`, computing it on a miss. Concurrent callers
    /// for one key share a single computation. Errors are not cached.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> EngineResult<Arc<YearCalendar>>
    where
        F: FnOnce() -> EngineResult<YearCalendar>,
    {
        self.memory
            .try_get_with(key.to_string(), || {
                if let Some(found) = self.load_external(key) {
                    debug!("external cache hit");
                    return Ok(Arc::new(found));
                }
                let computed = compute()?;
                self.store_external(key, &computed);
                Ok(Arc::new(computed))
            })
            .map_err(|e: Arc<EngineError>| (*e).clone())
    }

    fn load_external(&self, key: &str) -> Option<YearCalendar> {
        let store = self.store.as_ref()?;
        let bytes = match store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(error_code = e.error_code(), error = %e, "cache read failed, treating as miss");
                return None;
            }
        };
        match serde_json::from_slice::<YearCalendar>(&bytes) {
            Ok(calendar) if calendar.engine_version == ENGINE_VERSION => Some(calendar),
            Ok(_) => None,
            Err(e) => {
                let e = CacheError::Decode { reason: e.to_string() };
                warn!(error_code = e.error_code(), error = %e, "cached calendar unreadable, treating as miss");
                None
            }
        }
    }

    fn store_external(&self, key: &str, calendar: &YearCalendar) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        let bytes = match serde_json::to_vec(calendar) {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "calendar could not be encoded for the cache");
                return;
            }
        };
        if let Err(e) = store.set(key, bytes, self.ttl) {
            warn!(error_code = e.error_code(), error = %e, "cache write failed");
        }
    }

    pub fn invalidate(&self, key: &str) {
        self.memory.invalidate(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.memory.contains_key(key)
    }
}

/// moka-backed [`CacheStore`] with per-entry expiry, for tests and demos.
pub struct InMemoryCacheStore {
    entries: Cache<String, (Vec<u8>, Instant)>,
}

impl InMemoryCacheStore {
    pub fn new(max_entries: u64) -> Self {
        Self {
            entries: Cache::new(max_entries),
        }
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new(1_024)
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match self.entries.get(key) {
            Some((bytes, expires)) if Instant::now() < expires => Ok(Some(bytes)),
            Some(_) => {
                self.entries.invalidate(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let expires = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheError::Backend {
                reason: "ttl overflows the clock".to_string(),
            })?;
        self.entries.insert(key.to_string(), (value, expires));
        Ok(())
    }
}
