//! Command-line front end

pub mod commands;
pub mod parse;

pub use commands::{Cli, Commands};

use crate::core::{Interval, Period, PeriodCollection, Relation, Timeline, Timestamp};
use crate::error::{Error, Result};
use parse::{parse_instant, parse_period};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RelateReport {
    period: Period,
    test: Period,
    relation: Relation,
    overlaps: bool,
    intersects: bool,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    count: usize,
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    duration_secs: Option<i64>,
    has_overlaps: bool,
    has_gaps: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    /// Covered by a single member
    on_timeline: bool,
    /// Shares an instant with some member; absent for instant lookups
    intersects: Option<bool>,
}

/// Run a parsed command and render its report
pub fn execute(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Relate { period, test } => {
            let period = parse_period(period)?;
            let test = parse_period(test)?;
            let report = RelateReport {
                relation: period.relation_to(&test)?,
                overlaps: period.overlaps_with(&test)?,
                intersects: period.intersects_with(&test),
                period,
                test,
            };
            if cli.json {
                return Ok(serde_json::to_string_pretty(&report)?);
            }
            Ok(report.relation.to_string())
        }
        Commands::Summary { periods } => {
            let periods = parse_collection(periods)?;
            let report = SummaryReport {
                count: periods.len(),
                start: periods.start_bound(),
                end: periods.end_bound(),
                duration_secs: (periods.has_start() && periods.has_end())
                    .then(|| periods.duration().num_seconds()),
                has_overlaps: periods.has_overlaps()?,
                has_gaps: periods.has_gaps(),
            };
            if cli.json {
                return Ok(serde_json::to_string_pretty(&report)?);
            }
            Ok(render_summary(&report))
        }
        Commands::Check {
            periods,
            at,
            during,
        } => {
            let periods = parse_collection(periods)?;
            let timeline = Timeline::new(&periods);
            let report = match (at, during) {
                (Some(at), _) => CheckReport {
                    on_timeline: timeline.is_on_timeline(parse_instant(at)?),
                    intersects: None,
                },
                (None, Some(during)) => {
                    let test = parse_period(during)?;
                    CheckReport {
                        on_timeline: timeline.is_period_on_timeline(&test),
                        intersects: Some(timeline.intersects_with(&test)),
                    }
                }
                (None, None) => return Err(Error::MissingArgument("--at or --during")),
            };
            if cli.json {
                return Ok(serde_json::to_string_pretty(&report)?);
            }
            let mut out = format!("on timeline: {}", report.on_timeline);
            if let Some(intersects) = report.intersects {
                out.push_str(&format!("\nintersects: {intersects}"));
            }
            Ok(out)
        }
        Commands::Shift { periods, to } => {
            let mut periods = parse_collection(periods)?;
            periods.shift_to_start(parse_instant(to)?)?;
            if cli.json {
                return Ok(serde_json::to_string_pretty(&periods)?);
            }
            Ok(periods
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

fn parse_collection(periods: &[String]) -> Result<PeriodCollection> {
    periods.iter().map(|text| parse_period(text)).collect()
}

fn render_summary(report: &SummaryReport) -> String {
    let bound = |ts: Option<Timestamp>| ts.map_or_else(|| "unbounded".to_string(), |t| t.to_string());
    let duration = report
        .duration_secs
        .map_or_else(|| "undefined".to_string(), |secs| format!("{secs}s"));
    format!(
        "periods: {}\nstart: {}\nend: {}\nduration: {}\noverlaps: {}\ngaps: {}",
        report.count,
        bound(report.start),
        bound(report.end),
        duration,
        report.has_overlaps,
        report.has_gaps,
    )
}
