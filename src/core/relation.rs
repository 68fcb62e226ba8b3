//! Topological relation between two intervals

use crate::core::interval::Interval;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// How a probe interval ("test") lies relative to a reference interval
///
/// Exactly one variant holds for any pair of well-formed intervals. Variant
/// names describe the probe as seen from the reference: `After` means the
/// probe ends before the reference starts, `Enclosing` means the reference
/// encloses the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    After,
    StartTouching,
    StartInside,
    InsideStartTouching,
    EnclosingStartTouching,
    Enclosing,
    EnclosingEndTouching,
    ExactMatch,
    Inside,
    InsideEndTouching,
    EndInside,
    EndTouching,
    Before,
}

impl Relation {
    /// Every relation, in timeline order
    pub const ALL: [Relation; 13] = [
        Relation::After,
        Relation::StartTouching,
        Relation::StartInside,
        Relation::InsideStartTouching,
        Relation::EnclosingStartTouching,
        Relation::Enclosing,
        Relation::EnclosingEndTouching,
        Relation::ExactMatch,
        Relation::Inside,
        Relation::InsideEndTouching,
        Relation::EndInside,
        Relation::EndTouching,
        Relation::Before,
    ];

    /// The relation seen from the other side, i.e. with the arguments swapped
    pub fn inverse(self) -> Self {
        match self {
            Relation::After => Relation::Before,
            Relation::Before => Relation::After,
            Relation::StartTouching => Relation::EndTouching,
            Relation::EndTouching => Relation::StartTouching,
            Relation::StartInside => Relation::EndInside,
            Relation::EndInside => Relation::StartInside,
            Relation::Enclosing => Relation::Inside,
            Relation::Inside => Relation::Enclosing,
            Relation::EnclosingStartTouching => Relation::InsideStartTouching,
            Relation::InsideStartTouching => Relation::EnclosingStartTouching,
            Relation::EnclosingEndTouching => Relation::InsideEndTouching,
            Relation::InsideEndTouching => Relation::EnclosingEndTouching,
            Relation::ExactMatch => Relation::ExactMatch,
        }
    }

    /// No instant in common
    pub fn is_disjoint(self) -> bool {
        matches!(self, Relation::After | Relation::Before)
    }

    /// Exactly one boundary instant in common
    pub fn is_touching(self) -> bool {
        matches!(self, Relation::StartTouching | Relation::EndTouching)
    }

    /// More than a boundary instant in common
    pub fn is_overlap(self) -> bool {
        !self.is_disjoint() && !self.is_touching()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Classify how `test` relates to `period`
///
/// Checks run in a fixed order and the first match wins, so boundary-sharing
/// cases resolve to touching before containment. Falling through every case
/// means an `Interval` implementation reported inconsistent bounds.
pub fn classify<P, T>(period: &P, test: &T) -> Result<Relation>
where
    P: Interval + ?Sized,
    T: Interval + ?Sized,
{
    let (start, end) = (period.start(), period.end());
    let (test_start, test_end) = (test.start(), test.end());

    if test_end < start {
        return Ok(Relation::After);
    }
    if test_start > end {
        return Ok(Relation::Before);
    }
    if test_start == start && test_end == end {
        return Ok(Relation::ExactMatch);
    }
    if test_end == start {
        return Ok(Relation::StartTouching);
    }
    if test_start == end {
        return Ok(Relation::EndTouching);
    }

    if period.has_inside_period(test) {
        return Ok(if test_start == start {
            Relation::EnclosingStartTouching
        } else if test_end == end {
            Relation::EnclosingEndTouching
        } else {
            Relation::Enclosing
        });
    }

    let contains_start = test.has_inside(start);
    let contains_end = test.has_inside(end);
    match (contains_start, contains_end) {
        (true, true) if test_start == start => Ok(Relation::InsideStartTouching),
        (true, true) if test_end == end => Ok(Relation::InsideEndTouching),
        (true, true) => Ok(Relation::Inside),
        (true, false) => Ok(Relation::StartInside),
        (false, true) => Ok(Relation::EndInside),
        (false, false) => {
            let message = format!(
                "invalid period relation of [{start}, {end}] and [{test_start}, {test_end}]"
            );
            tracing::error!("{}", message);
            Err(Error::InternalInconsistency(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::Period;
    use crate::core::temporal::Timestamp;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> Period {
        Period::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
    }

    fn secs(start: i64, end: i64) -> Period {
        Period::new(
            Timestamp::from_secs(start).unwrap(),
            Timestamp::from_secs(end).unwrap(),
        )
        .unwrap()
    }

    /// Start/end pairs (possibly equal) drawn from a small range so that
    /// shared boundaries come up often.
    fn arb_period() -> impl Strategy<Value = Period> {
        (0i64..40, 0i64..40).prop_map(|(a, b)| secs(a.min(b), a.max(b)))
    }

    /// Interval type that does not enforce `start <= end`
    struct Unchecked(Timestamp, Timestamp);

    impl Interval for Unchecked {
        fn start(&self) -> Timestamp {
            self.0
        }
        fn end(&self) -> Timestamp {
            self.1
        }
    }

    fn unchecked(start: i64, end: i64) -> Unchecked {
        Unchecked(
            Timestamp::from_secs(start).unwrap(),
            Timestamp::from_secs(end).unwrap(),
        )
    }

    #[test]
    fn test_calendar_relations() {
        let year = period((2018, 1, 1), (2018, 12, 31));

        let test = period((2018, 6, 1), (2019, 2, 20));
        assert_eq!(classify(&year, &test).unwrap(), Relation::EndInside);

        let test = period((2017, 2, 1), (2017, 2, 20));
        assert_eq!(classify(&year, &test).unwrap(), Relation::After);

        let test = period((2019, 2, 1), (2019, 2, 20));
        assert_eq!(classify(&year, &test).unwrap(), Relation::Before);

        let test = period((2018, 1, 1), (2018, 12, 31));
        assert_eq!(classify(&year, &test).unwrap(), Relation::ExactMatch);

        let test = period((2017, 1, 1), (2018, 1, 1));
        assert_eq!(classify(&year, &test).unwrap(), Relation::StartTouching);
    }

    #[test]
    fn test_every_relation_reachable() {
        let reference = secs(10, 20);
        let cases = [
            (secs(0, 5), Relation::After),
            (secs(0, 10), Relation::StartTouching),
            (secs(5, 15), Relation::StartInside),
            (secs(10, 25), Relation::InsideStartTouching),
            (secs(10, 15), Relation::EnclosingStartTouching),
            (secs(12, 18), Relation::Enclosing),
            (secs(15, 20), Relation::EnclosingEndTouching),
            (secs(10, 20), Relation::ExactMatch),
            (secs(5, 25), Relation::Inside),
            (secs(5, 20), Relation::InsideEndTouching),
            (secs(15, 25), Relation::EndInside),
            (secs(20, 25), Relation::EndTouching),
            (secs(25, 30), Relation::Before),
        ];

        for (test, expected) in &cases {
            assert_eq!(classify(&reference, test).unwrap(), *expected, "{test}");
        }
        let seen: Vec<Relation> = cases.iter().map(|(_, r)| *r).collect();
        assert_eq!(seen, Relation::ALL.to_vec());
    }

    #[test]
    fn test_touching_takes_precedence_for_zero_length() {
        let reference = secs(10, 20);
        assert_eq!(classify(&reference, &secs(10, 10)).unwrap(), Relation::StartTouching);
        assert_eq!(classify(&reference, &secs(20, 20)).unwrap(), Relation::EndTouching);
        assert_eq!(classify(&reference, &secs(15, 15)).unwrap(), Relation::Enclosing);
        assert_eq!(classify(&secs(15, 15), &secs(15, 15)).unwrap(), Relation::ExactMatch);
    }

    #[test]
    fn test_reversed_bounds_still_classify() {
        let reference = unchecked(20, 10);
        assert_eq!(classify(&reference, &secs(5, 25)).unwrap(), Relation::Inside);
        assert_eq!(classify(&secs(10, 20), &unchecked(18, 12)).unwrap(), Relation::Enclosing);
    }

    #[test]
    fn test_relation_flags() {
        let overlapping: Vec<Relation> =
            Relation::ALL.into_iter().filter(|r| r.is_overlap()).collect();
        assert_eq!(overlapping.len(), 9);
        assert!(Relation::Before.is_disjoint());
        assert!(Relation::StartTouching.is_touching());
        assert!(!Relation::ExactMatch.is_touching());
        assert_eq!(Relation::EnclosingEndTouching.to_string(), "EnclosingEndTouching");
    }

    proptest! {
        #[test]
        fn prop_classify_is_total(p in arb_period(), t in arb_period()) {
            prop_assert!(classify(&p, &t).is_ok());
        }

        #[test]
        fn prop_classify_is_total_for_unchecked_bounds(
            a in 0i64..40, b in 0i64..40, c in 0i64..40, d in 0i64..40
        ) {
            prop_assert!(classify(&unchecked(a, b), &unchecked(c, d)).is_ok());
        }

        #[test]
        fn prop_swapping_arguments_inverts(p in arb_period(), t in arb_period()) {
            let forward = classify(&p, &t).unwrap();
            let backward = classify(&t, &p).unwrap();
            prop_assert_eq!(forward.inverse(), backward);
        }

        #[test]
        fn prop_overlap_matches_relation(p in arb_period(), t in arb_period()) {
            let relation = classify(&p, &t).unwrap();
            let non_overlapping = matches!(
                relation,
                Relation::Before | Relation::After | Relation::StartTouching | Relation::EndTouching
            );
            prop_assert_eq!(p.overlaps_with(&t).unwrap(), !non_overlapping);
        }

        #[test]
        fn prop_overlap_implies_intersection(p in arb_period(), t in arb_period()) {
            if p.overlaps_with(&t).unwrap() {
                prop_assert!(p.intersects_with(&t));
                prop_assert!(t.intersects_with(&p));
            }
        }
    }
}
