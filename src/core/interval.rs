//! Predicates shared by everything that spans a stretch of time

use crate::core::relation::{classify, Relation};
use crate::core::temporal::{Duration, Timestamp};
use crate::error::Result;

/// A closed stretch of time `[start, end]`
///
/// Implemented by [`Period`](crate::core::Period) and by
/// [`PeriodCollection`](crate::core::PeriodCollection), whose bounds are the
/// aggregate bounds of its members.
pub trait Interval {
    /// First instant of the interval
    fn start(&self) -> Timestamp;

    /// Last instant of the interval
    fn end(&self) -> Timestamp;

    /// Whether the start is a real instant rather than a sentinel
    fn has_start(&self) -> bool {
        !self.start().is_sentinel()
    }

    /// Whether the end is a real instant rather than a sentinel
    fn has_end(&self) -> bool {
        !self.end().is_sentinel()
    }

    /// Start bound, `None` when unset
    fn start_bound(&self) -> Option<Timestamp> {
        self.has_start().then(|| self.start())
    }

    /// End bound, `None` when unset
    fn end_bound(&self) -> Option<Timestamp> {
        self.has_end().then(|| self.end())
    }

    fn duration(&self) -> Duration {
        self.end() - self.start()
    }

    /// Same start and same end
    fn is_same_period<I: Interval + ?Sized>(&self, other: &I) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }

    /// Whether `instant` lies within the interval, bounds included
    fn has_inside(&self, instant: Timestamp) -> bool {
        instant >= self.start() && instant <= self.end()
    }

    /// Whether both bounds of `other` lie within the interval
    fn has_inside_period<I: Interval + ?Sized>(&self, other: &I) -> bool {
        self.has_inside(other.start()) && self.has_inside(other.end())
    }

    /// Whether the two intervals share at least one instant
    fn intersects_with<I: Interval + ?Sized>(&self, other: &I) -> bool {
        self.has_inside(other.start())
            || self.has_inside(other.end())
            || (other.start() < self.start() && other.end() > self.end())
    }

    /// How `test` relates to this interval
    fn relation_to<I: Interval + ?Sized>(&self, test: &I) -> Result<Relation> {
        classify(self, test)
    }

    /// Whether the intervals share more than a boundary instant
    fn overlaps_with<I: Interval + ?Sized>(&self, other: &I) -> Result<bool> {
        Ok(self.relation_to(other)?.is_overlap())
    }
}
