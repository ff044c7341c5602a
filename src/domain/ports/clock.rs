//! Clock port - source of the render timestamp.

use chrono::{DateTime, SecondsFormat, Utc};

/// Supplies "now"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// `now()` as RFC 3339 with second precision and a `Z` offset
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
