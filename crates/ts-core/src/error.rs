//! Error type shared by all series operations.

use thiserror::Error;

/// Errors produced by [`TimeSeries`](crate::TimeSeries) operations.
///
/// Every variant is a local, recoverable condition. Nothing in this crate
/// panics on bad input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    /// No sample is stored at exactly this time.
    #[error("no sample stored at time {time}")]
    NotFound { time: f64 },

    /// An input could not be coerced to a finite number.
    #[error("invalid number for {field}: {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    /// A gap was requested at a position past the end of the series.
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The series covers zero time, so a time-weighted average is undefined.
    #[error("series covers zero duration; average is undefined")]
    DegenerateSeries,

    /// The covered duration or the integral exceeds the `f64` range.
    #[error("series integral overflows (duration {duration}, integral {integral})")]
    NumericOverflow { duration: f64, integral: f64 },

    /// Unknown clean pattern name.
    #[error("unsupported clean pattern: {pattern}")]
    UnsupportedPattern { pattern: String },

    /// The trend of a series with at least two samples has no defined formula yet.
    #[error("trend is not implemented (midpoint {midpoint}, average {average:?})")]
    TrendUnimplemented { midpoint: f64, average: Option<f64> },
}
