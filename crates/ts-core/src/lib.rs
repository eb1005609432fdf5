//! Core data model for piecewise-defined numeric time series.
//!
//! This crate contains:
//! - `TimeSeries`: ordered samples interleaved with explicit gaps
//! - Derived statistics: covered duration and time-weighted average
//! - Cleaning of redundant samples
//! - Parallel summaries over many independent series
//!
//! Reading and writing any external series file format is left to callers.

mod entry;
mod error;
mod series;
pub mod summary;
pub mod types;

pub use entry::{Entry, IntoNumber, Sample};
pub use error::SeriesError;
pub use series::{Coverage, GAP_SENTINEL, TimeSeries};
pub use summary::{SeriesSummary, summarize, summarize_all};
pub use types::{CleanPattern, Interpolation, TemporalMode, UnknownVariant};
