//! CLI commands

use clap::{Parser, Subcommand};

/// Simple-Timeline CLI
#[derive(Parser, Debug)]
#[command(name = "simple-timeline")]
#[command(about = "Interval relations and aggregate timelines")]
pub struct Cli {
    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Periods are written `START/END`; instants as RFC 3339, `YYYY-MM-DD`,
/// `min` or `max`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify how a test period relates to a reference period
    Relate {
        /// Reference period
        #[arg(short, long)]
        period: String,
        /// Period compared against the reference
        #[arg(short, long)]
        test: String,
    },
    /// Aggregate bounds, overlaps and gaps of a set of periods
    Summary {
        /// Member periods
        #[arg(required = true)]
        periods: Vec<String>,
    },
    /// Check an instant or a period against the timeline of a set of periods
    Check {
        /// Member periods
        #[arg(required = true)]
        periods: Vec<String>,
        /// Instant to look up
        #[arg(long, conflicts_with = "during")]
        at: Option<String>,
        /// Period to look up
        #[arg(long)]
        during: Option<String>,
    },
    /// Shift a set of periods so that it starts at a new instant
    Shift {
        /// Member periods
        #[arg(required = true)]
        periods: Vec<String>,
        /// New start of the set
        #[arg(long)]
        to: String,
    },
}
