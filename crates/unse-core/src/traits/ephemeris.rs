use crate::errors::EphemerisError;
use crate::models::{Body, BodyPosition};

/// Astronomical position source.
///
/// Implementations must be pure in `(jd_ut, body)`.
pub trait EphemerisBackend: Send + Sync {
    /// Geocentric ecliptic position of `body` at Julian Day `jd_ut` (UT).
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, EphemerisError>;

    /// Whether this backend can compute `body` at all.
    fn supports(&self, body: Body) -> bool;

    /// Whether concurrent calls are safe. Non-reentrant backends are
    /// driven through a single owner thread.
    fn is_reentrant(&self) -> bool {
        true
    }

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}
