//! Parsing instants and periods from command-line text

use crate::core::{Period, Timestamp};
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse an RFC 3339 datetime, a `YYYY-MM-DD` date (midnight UTC), or one of
/// the sentinels `min` / `max`
pub fn parse_instant(text: &str) -> Result<Timestamp> {
    let text = text.trim();
    match text {
        "" => return Err(Error::MissingArgument("instant")),
        "min" => return Ok(Timestamp::MIN),
        "max" => return Ok(Timestamp::MAX),
        _ => {}
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(Timestamp::from(dt.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Timestamp::from)
        .map_err(|_| Error::Parse(format!("'{text}' is not an RFC 3339 datetime or YYYY-MM-DD date")))
}

/// Parse a `START/END` period
pub fn parse_period(text: &str) -> Result<Period> {
    let (start, end) = text
        .split_once('/')
        .ok_or_else(|| Error::Parse(format!("'{text}' is not a START/END period")))?;
    if start.trim().is_empty() {
        return Err(Error::MissingArgument("period start"));
    }
    if end.trim().is_empty() {
        return Err(Error::MissingArgument("period end"));
    }
    Period::new(parse_instant(start)?, parse_instant(end)?)
}
