//! Ordered collection of periods with aggregate bounds

use crate::core::interval::Interval;
use crate::core::period::Period;
use crate::core::predicates;
use crate::core::temporal::{Duration, Timestamp};
use crate::error::{Error, Result};
use serde::Serialize;
use std::ops::Index;
use tracing::debug;

/// Ordered list of periods
///
/// Duplicates and overlaps are allowed. The collection's own bounds are the
/// earliest member start and the latest member end, recomputed on every call;
/// an empty collection reports `Timestamp::MIN` and `Timestamp::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeriodCollection {
    periods: Vec<Period>,
}

impl PeriodCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding `periods` in order
    pub fn from_periods(periods: impl IntoIterator<Item = Period>) -> Self {
        periods.into_iter().collect()
    }

    /// Number of periods
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn get(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Period> {
        self.periods.get_mut(index)
    }

    /// Append a period
    pub fn add(&mut self, period: Period) {
        self.periods.push(period);
    }

    /// Append several periods
    pub fn add_range(&mut self, periods: impl IntoIterator<Item = Period>) {
        self.periods.extend(periods);
    }

    /// Insert at `index`, which may equal `len()`
    pub fn insert(&mut self, index: usize, period: Period) -> Result<()> {
        if index > self.periods.len() {
            return Err(self.out_of_range(index));
        }
        self.periods.insert(index, period);
        Ok(())
    }

    /// Replace the period at `index`, returning the old one
    pub fn set(&mut self, index: usize, period: Period) -> Result<Period> {
        let len = self.periods.len();
        let slot = self
            .periods
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, period))
    }

    /// Remove the first period equal to `period`
    pub fn remove(&mut self, period: &Period) -> bool {
        match self.index_of(period) {
            Some(index) => {
                self.periods.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Period> {
        if index >= self.periods.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.periods.remove(index))
    }

    pub fn clear(&mut self) {
        self.periods.clear();
    }

    /// Position of the first period equal to `period`, description included
    pub fn index_of(&self, period: &Period) -> Option<usize> {
        self.periods.iter().position(|p| p == period)
    }

    /// Whether a period equal to `period` is a member, description included
    pub fn contains(&self, period: &Period) -> bool {
        self.periods.contains(period)
    }

    /// Whether any member has exactly the bounds of `test`
    pub fn contains_period<T: Interval + ?Sized>(&self, test: &T) -> bool {
        self.periods.iter().any(|p| p.is_same_period(test))
    }

    /// Shift every member by `delta`
    ///
    /// Gaps and overlaps between members are preserved. Nothing is changed if
    /// any shifted bound would leave the representable range.
    pub fn move_by(&mut self, delta: Duration) -> Result<()> {
        if delta.is_zero() {
            return Ok(());
        }

        let shifted = self
            .periods
            .iter()
            .map(|period| {
                let start = period.start().checked_add(delta)?;
                let end = start.checked_add(period.duration())?;
                Some((start, end))
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                Error::Temporal(format!("moving periods by {delta} leaves the representable range"))
            })?;

        for (period, (start, end)) in self.periods.iter_mut().zip(shifted) {
            period.setup(start, end);
        }
        debug!(count = self.periods.len(), %delta, "moved periods");
        Ok(())
    }

    /// Shift every member so the collection starts at `start`
    pub fn shift_to_start(&mut self, start: Timestamp) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        self.move_by(start - self.start())
    }

    /// Shift every member so the collection ends at `end`
    pub fn shift_to_end(&mut self, end: Timestamp) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        self.move_by(end - self.end())
    }

    /// Whether any two members overlap
    pub fn has_overlaps(&self) -> Result<bool> {
        match self.periods.as_slice() {
            [] | [_] => Ok(false),
            [first, second] => first.overlaps_with(second),
            _ => {
                let sorted = self.sorted_by_start();
                for (i, period) in sorted.iter().enumerate() {
                    // Members starting after `period` ends are all `Before` it
                    for later in sorted[i + 1..]
                        .iter()
                        .take_while(|later| later.start() <= period.end())
                    {
                        if period.overlaps_with(*later)? {
                            debug!(first = %period, second = %later, "found overlapping periods");
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
        }
    }

    /// Whether some stretch between the collection's bounds is covered by no member
    pub fn has_gaps(&self) -> bool {
        let sorted = self.sorted_by_start();
        let Some((first, rest)) = sorted.split_first() else {
            return false;
        };

        let mut covered_until = first.end();
        for period in rest {
            if period.start() > covered_until {
                return true;
            }
            covered_until = covered_until.max(period.end());
        }
        false
    }

    /// Whether any member overlaps `test`
    pub fn has_overlap_periods<T: Interval + ?Sized>(&self, test: &T) -> Result<bool> {
        for period in &self.periods {
            if period.overlaps_with(test)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Members overlapping `test`
    pub fn overlap_periods<T: Interval + ?Sized>(&self, test: &T) -> Result<PeriodCollection> {
        let mut matches = PeriodCollection::new();
        for period in &self.periods {
            if period.overlaps_with(test)? {
                matches.add(period.clone());
            }
        }
        Ok(matches)
    }

    /// Whether any member contains `instant`
    pub fn has_intersection_at(&self, instant: Timestamp) -> bool {
        predicates::contains_instant(&self.periods, instant)
    }

    /// Members containing `instant`
    pub fn intersection_periods_at(&self, instant: Timestamp) -> PeriodCollection {
        self.filtered(|period| period.has_inside(instant))
    }

    /// Whether any member shares an instant with `test`
    pub fn has_intersection_periods<T: Interval + ?Sized>(&self, test: &T) -> bool {
        predicates::intersects(&self.periods, test)
    }

    /// Members sharing an instant with `test`
    pub fn intersection_periods<T: Interval + ?Sized>(&self, test: &T) -> PeriodCollection {
        self.filtered(|period| period.intersects_with(test))
    }

    /// Members lying entirely inside `test`
    pub fn inside_periods<T: Interval + ?Sized>(&self, test: &T) -> PeriodCollection {
        self.filtered(|period| test.has_inside_period(period))
    }

    fn filtered(&self, keep: impl Fn(&Period) -> bool) -> PeriodCollection {
        self.periods.iter().filter(|p| keep(p)).cloned().collect()
    }

    fn sorted_by_start(&self) -> Vec<&Period> {
        let mut sorted: Vec<&Period> = self.periods.iter().collect();
        sorted.sort_by_key(|p| (p.start(), p.end()));
        sorted
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.periods.len(),
        }
    }
}

impl Interval for PeriodCollection {
    fn start(&self) -> Timestamp {
        self.periods
            .iter()
            .map(|p| p.start())
            .min()
            .unwrap_or(Timestamp::MIN)
    }

    fn end(&self) -> Timestamp {
        self.periods
            .iter()
            .map(|p| p.end())
            .max()
            .unwrap_or(Timestamp::MAX)
    }
}

impl Index<usize> for PeriodCollection {
    type Output = Period;

    fn index(&self, index: usize) -> &Period {
        &self.periods[index]
    }
}

impl FromIterator<Period> for PeriodCollection {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        Self {
            periods: iter.into_iter().collect(),
        }
    }
}

impl Extend<Period> for PeriodCollection {
    fn extend<I: IntoIterator<Item = Period>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl IntoIterator for PeriodCollection {
    type Item = Period;
    type IntoIter = std::vec::IntoIter<Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<'a> IntoIterator for &'a PeriodCollection {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
