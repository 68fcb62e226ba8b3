//! A single period of time

use crate::core::interval::Interval;
use crate::core::temporal::{Duration, Timestamp};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Closed period `[start, end]` with an optional free-form label
///
/// `start <= end` holds from construction on. The duration can be changed,
/// which moves `end`; `start` only moves when a collection shifts its members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    start: Timestamp,
    end: Timestamp,
    /// Label with no effect on relations
    description: Option<String>,
}

impl Period {
    /// Create a period, failing if `start` lies after `end`
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            description: None,
        })
    }

    /// Period with neither start nor end
    pub fn unbounded() -> Self {
        Self {
            start: Timestamp::MIN,
            end: Timestamp::MAX,
            description: None,
        }
    }

    /// Period from `start` with no end
    pub fn open_ended(start: Timestamp) -> Self {
        Self {
            start,
            end: Timestamp::MAX,
            description: None,
        }
    }

    /// Start building a period
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Change the duration by moving `end`
    pub fn set_duration(&mut self, duration: Duration) -> Result<()> {
        let end = self.start.checked_add(duration).ok_or_else(|| {
            Error::Temporal(format!("{} plus {duration} is out of range", self.start))
        })?;
        if end < self.start {
            return Err(Error::InvalidRange {
                start: self.start,
                end,
            });
        }
        self.end = end;
        Ok(())
    }

    /// Overwrite both bounds without checking their order.
    ///
    /// Only for bulk shifts that move both bounds by the same delta.
    pub(crate) fn setup(&mut self, start: Timestamp, end: Timestamp) {
        self.start = start;
        self.end = end;
    }
}

impl Interval for Period {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn end(&self) -> Timestamp {
        self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)?;
        if let Some(description) = &self.description {
            write!(f, " {description}")?;
        }
        Ok(())
    }
}

/// Builder for periods assembled from optional parts
#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    duration: Option<Duration>,
    description: Option<String>,
}

impl PeriodBuilder {
    /// Set start
    pub fn start(mut self, start: Timestamp) -> Self {
        self.start = Some(start);
        self
    }

    /// Set end
    pub fn end(mut self, end: Timestamp) -> Self {
        self.end = Some(end);
        self
    }

    /// Set end relative to the start; an explicit `end` takes precedence
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the period
    pub fn build(self) -> Result<Period> {
        let start = self.start.ok_or(Error::MissingArgument("start"))?;
        let end = match (self.end, self.duration) {
            (Some(end), _) => end,
            (None, Some(duration)) => start.checked_add(duration).ok_or_else(|| {
                Error::Temporal(format!("{start} plus {duration} is out of range"))
            })?,
            (None, None) => return Err(Error::MissingArgument("end")),
        };
        let mut period = Period::new(start, end)?;
        period.description = self.description;
        Ok(period)
    }
}
