//! Instants and spans of time

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::Sub;

/// Signed span between two instants
pub type Duration = TimeDelta;

/// Timestamp representing a UTC point in time
///
/// `Timestamp::MIN` and `Timestamp::MAX` double as the "unset" markers for
/// period bounds: a bound sitting on either of them is not a real instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp {
    inner: DateTime<Utc>,
}

impl Timestamp {
    /// Smallest representable instant, the "no start" sentinel
    pub const MIN: Self = Self {
        inner: DateTime::<Utc>::MIN_UTC,
    };

    /// Largest representable instant, the "no end" sentinel
    pub const MAX: Self = Self {
        inner: DateTime::<Utc>::MAX_UTC,
    };

    /// Create a timestamp from a chrono UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self { inner: dt }
    }

    /// Midnight UTC on the given calendar day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::from_datetime(naive.and_utc()))
            .ok_or_else(|| {
                Error::Temporal(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
            })
    }

    /// Create a timestamp from seconds since Unix epoch
    pub fn from_secs(secs: i64) -> Result<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(Self::from_datetime)
            .ok_or_else(|| Error::Temporal(format!("{secs}s since epoch is out of range")))
    }

    /// Create a timestamp from milliseconds since Unix epoch
    pub fn from_millis(millis: i64) -> Result<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(Self::from_datetime)
            .ok_or_else(|| Error::Temporal(format!("{millis}ms since epoch is out of range")))
    }

    /// Get current timestamp
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Convert to chrono DateTime
    pub fn to_datetime(&self) -> DateTime<Utc> {
        self.inner
    }

    /// Get seconds since Unix epoch
    pub fn as_secs(&self) -> i64 {
        self.inner.timestamp()
    }

    /// True for `MIN` and `MAX`
    pub fn is_sentinel(&self) -> bool {
        *self == Self::MIN || *self == Self::MAX
    }

    /// Add a span, `None` if the result is not representable
    pub fn checked_add(&self, span: Duration) -> Option<Self> {
        self.inner.checked_add_signed(span).map(Self::from_datetime)
    }

    /// Subtract a span, `None` if the result is not representable
    pub fn checked_sub(&self, span: Duration) -> Option<Self> {
        self.inner.checked_sub_signed(span).map(Self::from_datetime)
    }

    /// Signed span from `earlier` to `self`
    pub fn since(&self, earlier: Timestamp) -> Duration {
        self.inner.signed_duration_since(earlier.inner)
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Timestamp) -> Duration {
        self.since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Self::from_datetime(date.and_time(chrono::NaiveTime::default()).and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_creation() {
        let ts = Timestamp::from_secs(1000).unwrap();
        assert_eq!(ts.as_secs(), 1000);

        let ms = Timestamp::from_millis(1_000_000).unwrap();
        assert_eq!(ts, ms);

        assert!(Timestamp::now() > ts);
    }

    #[test]
    fn test_from_ymd() {
        let ts = Timestamp::from_ymd(2018, 2, 3).unwrap();
        assert_eq!(ts.to_string(), "2018-02-03T00:00:00Z");

        let err = Timestamp::from_ymd(2018, 2, 30).unwrap_err();
        assert!(matches!(err, Error::Temporal(_)));
    }

    #[test]
    fn test_display_matches_json() {
        let ts = Timestamp::from_millis(1_517_616_000_250).unwrap();
        assert_eq!(ts.to_string(), "2018-02-03T00:00:00.250Z");
        assert_eq!(serde_json::to_string(&ts).unwrap(), format!("\"{ts}\""));
    }

    #[test]
    fn test_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2018, 8, 9).unwrap();
        assert_eq!(Timestamp::from(date), Timestamp::from_ymd(2018, 8, 9).unwrap());
    }

    #[test]
    fn test_sentinels() {
        assert!(Timestamp::MIN.is_sentinel());
        assert!(Timestamp::MAX.is_sentinel());
        assert!(!Timestamp::from_ymd(2018, 1, 1).unwrap().is_sentinel());
        assert!(Timestamp::MIN < Timestamp::MAX);

        // The full representable span fits in a Duration
        let span = Timestamp::MAX - Timestamp::MIN;
        assert!(span > Duration::zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        let ts = Timestamp::from_ymd(2018, 1, 1).unwrap();
        let next = ts.checked_add(Duration::days(364)).unwrap();
        assert_eq!(next, Timestamp::from_ymd(2018, 12, 31).unwrap());
        assert_eq!(next.checked_sub(Duration::days(364)), Some(ts));
        assert_eq!(next - ts, Duration::days(364));
        assert_eq!(ts - next, Duration::days(-364));

        assert_eq!(Timestamp::MAX.checked_add(Duration::days(1)), None);
        assert_eq!(Timestamp::MIN.checked_sub(Duration::days(1)), None);
    }
}
