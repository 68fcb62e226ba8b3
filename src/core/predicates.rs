//! Membership queries over any sequence of intervals
//!
//! Each query scans in iteration order and stops at the first match; the
//! input does not need to be sorted.

use crate::core::interval::Interval;
use crate::core::temporal::Timestamp;

/// Whether any interval contains `instant`
pub fn contains_instant<'a, I, P>(periods: I, instant: Timestamp) -> bool
where
    I: IntoIterator<Item = &'a P>,
    P: Interval + 'a,
{
    periods.into_iter().any(|period| period.has_inside(instant))
}

/// Whether any interval fully contains `test`
pub fn contains_period<'a, I, P, T>(periods: I, test: &T) -> bool
where
    I: IntoIterator<Item = &'a P>,
    P: Interval + 'a,
    T: Interval + ?Sized,
{
    periods.into_iter().any(|period| period.has_inside_period(test))
}

/// Whether any interval shares at least one instant with `test`
pub fn intersects<'a, I, P, T>(periods: I, test: &T) -> bool
where
    I: IntoIterator<Item = &'a P>,
    P: Interval + 'a,
    T: Interval + ?Sized,
{
    periods.into_iter().any(|period| period.intersects_with(test))
}
