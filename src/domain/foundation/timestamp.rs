//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Formats as RFC 3339, the wire format used in notification payloads.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_is_monotonic_enough() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(first <= second);
    }

    #[test]
    fn rfc3339_formatting_is_stable() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(ts.to_string(), ts.to_rfc3339());
    }

    #[test]
    fn serializes_transparently() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_string(&Timestamp::from_datetime(dt)).unwrap();
        assert_eq!(json, "\"2024-06-01T12:30:00Z\"");
    }
}
