//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC, at microsecond precision.
///
/// Precision matches PostgreSQL `TIMESTAMPTZ` so a stored `last_update`
/// compares equal to the value read back from the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Creates a timestamp for the current moment that is strictly later than `previous`.
    ///
    /// Two mutations inside the same microsecond still yield distinct values.
    pub fn now_after(previous: &Timestamp) -> Self {
        let now = Self::now();
        if now.0 > previous.0 {
            now
        } else {
            Self(previous.0 + Duration::microseconds(1))
        }
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(6))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now() - Duration::microseconds(1);
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_is_truncated_to_microseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond() % 1_000, 0);
    }

    #[test]
    fn from_datetime_drops_nanoseconds() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.as_datetime().nanosecond(), 123_456_000);
    }

    #[test]
    fn now_after_is_strictly_later_than_future_previous() {
        let future = Timestamp::from_datetime(Utc::now() + Duration::hours(1));
        let next = Timestamp::now_after(&future);
        assert!(next.is_after(&future));
        assert_eq!(
            next.as_datetime().signed_duration_since(*future.as_datetime()),
            Duration::microseconds(1)
        );
    }

    #[test]
    fn now_after_past_previous_is_current_time() {
        let past = Timestamp::from_datetime(Utc::now() - Duration::hours(1));
        let next = Timestamp::now_after(&past);
        assert!(next.is_after(&past));
        assert!(next < Timestamp::from_datetime(Utc::now() + Duration::seconds(1)));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();

        assert_eq!(ts.as_datetime().year(), 2024);
    }
}
