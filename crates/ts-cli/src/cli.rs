//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Time series analysis.
///
/// Reads JSON snapshots of time series and reports coverage, time-weighted
/// averages and lookups, or removes redundant samples.
#[derive(Debug, Parser)]
#[command(name = "tsa", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize coverage and time-weighted average of one or more series.
    Stats {
        /// Series snapshot files.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output one JSON object per series.
        #[arg(long)]
        json: bool,
    },

    /// Look up the value stored at exactly the given time.
    ValueAt {
        /// Series snapshot file.
        file: PathBuf,

        /// Time to look up. Must match a stored time exactly.
        #[arg(allow_negative_numbers = true)]
        time: f64,
    },

    /// Print time/value pairs.
    Values {
        /// Series snapshot file.
        file: PathBuf,

        /// Print one line per entry, with NaN placeholders at gaps.
        #[arg(long)]
        raw: bool,
    },

    /// Remove redundant samples.
    Clean {
        /// Series snapshot file.
        file: PathBuf,

        /// Clean pattern (defaults to the configured pattern).
        #[arg(long)]
        pattern: Option<String>,

        /// Rewrite the file instead of printing the cleaned series.
        #[arg(long)]
        in_place: bool,
    },

    /// Report the trend of a series.
    Trend {
        /// Series snapshot file.
        file: PathBuf,

        /// Start of the interval (defaults to the first sample time).
        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,

        /// End of the interval (defaults to the last sample time).
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,
    },
}
