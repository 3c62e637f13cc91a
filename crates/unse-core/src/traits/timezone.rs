use chrono::{DateTime, Utc};

use crate::errors::ChartError;

/// Timezone database lookup.
pub trait TimezoneDb: Send + Sync {
    /// Zone id covering a geographic position.
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<String, ChartError>;

    /// UTC offset of `zone` at `instant`, in minutes east of UTC.
    fn offset_minutes(&self, zone: &str, instant: DateTime<Utc>) -> Result<i32, ChartError>;
}
