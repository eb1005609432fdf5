//! Shared utilities for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use ts_core::TimeSeries;

/// Reads a series snapshot from a JSON file.
pub fn load_series(path: &Path) -> Result<TimeSeries> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Reads many snapshots in parallel, skipping files that fail to load.
///
/// Results keep the order of `paths`.
pub fn load_many(paths: &[PathBuf]) -> Vec<(PathBuf, TimeSeries)> {
    paths
        .par_iter()
        .filter_map(|path| match load_series(path) {
            Ok(series) => Some((path.clone(), series)),
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "skipping unreadable series");
                None
            }
        })
        .collect()
}

/// Writes a series snapshot as pretty-printed JSON.
pub fn write_series(path: &Path, series: &TimeSeries) -> Result<()> {
    let json = serde_json::to_string_pretty(series)?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Formats a number with a fixed number of decimal places.
pub fn format_number(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Formats an optional number, using `n/a` for `None`.
pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format_number(v, precision))
}
