//! Simple-Timeline: time periods and how they relate
//!
//! # Core Concepts
//!
//! - **Periods**: closed intervals `[start, end]` of UTC instants
//! - **Relations**: the thirteen ways a period can lie relative to another
//! - **Collections**: ordered sets of periods with aggregate bounds
//! - **Timelines**: coverage queries over a collection
//!
//! # Example
//!
//! ```
//! use simple_timeline::prelude::*;
//!
//! # fn example() -> simple_timeline::error::Result<()> {
//! let year = Period::new(Timestamp::from_ymd(2018, 1, 1)?, Timestamp::from_ymd(2018, 12, 31)?)?;
//! let winter = Period::new(Timestamp::from_ymd(2018, 12, 1)?, Timestamp::from_ymd(2019, 2, 28)?)?;
//!
//! assert_eq!(year.relation_to(&winter)?, Relation::EndInside);
//! assert!(year.overlaps_with(&winter)?);
//!
//! let employment = PeriodCollection::from_periods([year, winter]);
//! let timeline = Timeline::new(&employment);
//! assert!(timeline.is_on_timeline(Timestamp::from_ymd(2019, 1, 15)?));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod core;
pub mod error;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::core::*;
    pub use crate::error::{Error, Result};
}
