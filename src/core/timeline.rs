//! Timeline: coverage queries over a collection of periods

use crate::core::collection::PeriodCollection;
use crate::core::interval::Interval;
use crate::core::predicates;
use crate::core::temporal::Timestamp;

/// Answers whether instants or periods fall on the periods of a collection
#[derive(Debug, Clone, Copy)]
pub struct Timeline<'a> {
    periods: &'a PeriodCollection,
}

impl<'a> Timeline<'a> {
    /// Create a timeline over `periods`
    pub fn new(periods: &'a PeriodCollection) -> Self {
        Self { periods }
    }

    /// The collection backing this timeline
    pub fn periods(&self) -> &'a PeriodCollection {
        self.periods
    }

    /// Whether any period contains `instant`
    pub fn is_on_timeline(&self, instant: Timestamp) -> bool {
        predicates::contains_instant(self.periods, instant)
    }

    /// Whether a single period fully contains `test`
    pub fn is_period_on_timeline<T: Interval + ?Sized>(&self, test: &T) -> bool {
        predicates::contains_period(self.periods, test)
    }

    /// Whether any period shares an instant with `test`
    pub fn intersects_with<T: Interval + ?Sized>(&self, test: &T) -> bool {
        predicates::intersects(self.periods, test)
    }
}

impl<'a> From<&'a PeriodCollection> for Timeline<'a> {
    fn from(periods: &'a PeriodCollection) -> Self {
        Self::new(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::Period;

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    /// Employed from 1999 until April, then again from mid-August onwards
    fn employment(year: i32) -> PeriodCollection {
        PeriodCollection::from_periods([
            Period::new(date(1999, 5, 8), date(year, 4, 8)).unwrap(),
            Period::open_ended(date(year, 8, 15)),
        ])
    }

    #[test]
    fn test_timeline_instants() {
        let periods = employment(2018);
        let timeline = Timeline::new(&periods);

        assert!(timeline.is_on_timeline(date(2018, 1, 1)));
        assert!(timeline.is_on_timeline(date(2030, 1, 1)));
        assert!(!timeline.is_on_timeline(date(1998, 1, 1)));
        assert!(!timeline.is_on_timeline(date(2018, 6, 1)));
    }

    #[test]
    fn test_timeline_periods() {
        let periods = employment(2018);
        let timeline = Timeline::from(&periods);

        let january = Period::new(date(2018, 1, 1), date(2018, 1, 31)).unwrap();
        assert!(timeline.is_period_on_timeline(&january));
        assert!(timeline.intersects_with(&january));

        let june = Period::new(date(2018, 6, 1), date(2018, 6, 30)).unwrap();
        assert!(!timeline.is_period_on_timeline(&june));
        assert!(!timeline.intersects_with(&june));

        // Spans the unemployed stretch: touches both periods, inside neither
        let spring_to_autumn = Period::new(date(2018, 3, 1), date(2018, 9, 1)).unwrap();
        assert!(!timeline.is_period_on_timeline(&spring_to_autumn));
        assert!(timeline.intersects_with(&spring_to_autumn));
    }

    #[test]
    fn test_empty_timeline() {
        let periods = PeriodCollection::new();
        let timeline = Timeline::new(&periods);
        assert!(!timeline.is_on_timeline(date(2018, 1, 1)));
        assert!(!timeline.intersects_with(&Period::unbounded()));
        assert!(timeline.periods().is_empty());
    }
}
