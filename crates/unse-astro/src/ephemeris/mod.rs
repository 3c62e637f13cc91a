//! Ephemeris access.
//!
//! [`EphemerisAdapter`] is the only way the rest of the engine reaches an
//! [`EphemerisBackend`]. It checks range and body support, rejects
//! non-finite backend output, and routes non-reentrant backends through a
//! [`SerializedEphemeris`]. It never caches.

pub mod analytic;
pub mod guard;

pub use analytic::AnalyticEphemeris;
pub use guard::SerializedEphemeris;

use std::sync::Arc;

use tracing::{debug, info};

use unse_core::config::EphemerisConfig;
use unse_core::constants::{MAX_SUPPORTED_JD, MIN_SUPPORTED_JD};
use unse_core::errors::{ConfigError, EphemerisError};
use unse_core::models::{Body, BodyPosition};
use unse_core::traits::EphemerisBackend;

use crate::julian::normalize_degrees;

/// Fault code reported when a backend returns non-finite numbers.
pub const NON_FINITE_OUTPUT: i32 = -1;

enum Route {
    Direct(Arc<dyn EphemerisBackend>),
    Serialized(SerializedEphemeris),
}

pub struct EphemerisAdapter {
    route: Route,
    backend: Arc<dyn EphemerisBackend>,
}

impl EphemerisAdapter {
    /// Wrap a backend. Non-reentrant backends, or any backend when
    /// `serialize_calls` is set, get a dedicated owner thread.
    pub fn new(
        backend: Arc<dyn EphemerisBackend>,
        config: &EphemerisConfig,
    ) -> Result<Self, EphemerisError> {
        let serialize = config.serialize_calls || !backend.is_reentrant();
        let route = if serialize {
            Route::Serialized(SerializedEphemeris::spawn(
                Arc::clone(&backend),
                config.call_timeout(),
            )?)
        } else {
            Route::Direct(Arc::clone(&backend))
        };
        info!(backend = backend.name(), serialized = serialize, "ephemeris adapter ready");
        Ok(Self { route, backend })
    }

    /// Build the backend named in config.
    pub fn backend_from_config(
        config: &EphemerisConfig,
    ) -> Result<Arc<dyn EphemerisBackend>, ConfigError> {
        config.validate()?;
        match config.backend.as_str() {
            "analytic" => Ok(Arc::new(AnalyticEphemeris::new())),
            other => Err(ConfigError::UnknownBackend {
                name: other.to_string(),
            }),
        }
    }

    pub fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        if !jd_ut.is_finite() || !(MIN_SUPPORTED_JD..MAX_SUPPORTED_JD).contains(&jd_ut) {
            return Err(EphemerisError::OutOfRange { jd: jd_ut });
        }
        if !self.backend.supports(body) {
            return Err(EphemerisError::UnsupportedBody {
                body: body.as_str().to_string(),
            });
        }

        let raw = match &self.route {
            Route::Direct(backend) => backend.position(jd_ut, body),
            Route::Serialized(guard) => guard.position(jd_ut, body),
        }?;

        let finite = [raw.longitude, raw.latitude, raw.distance, raw.speed]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            debug!(body = body.as_str(), jd_ut, "backend returned non-finite output");
            return Err(EphemerisError::NativeFault {
                code: NON_FINITE_OUTPUT,
            });
        }

        Ok(BodyPosition {
            longitude: normalize_degrees(raw.longitude),
            ..raw
        })
    }

    pub fn is_serialized(&self) -> bool {
        matches!(self.route, Route::Serialized(_))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}
