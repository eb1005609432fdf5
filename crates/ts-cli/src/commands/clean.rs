//! Clean command for removing redundant samples.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use ts_core::CleanPattern;

use super::util::{load_series, write_series};

/// Cleans the series in `file`.
///
/// Rewrites the file when `in_place` is set, otherwise prints the cleaned
/// series as JSON.
pub fn run<W: Write>(
    writer: &mut W,
    file: &Path,
    pattern: CleanPattern,
    in_place: bool,
) -> Result<()> {
    let mut series = load_series(file)?;
    let removed = series.clean(pattern);

    if in_place {
        write_series(file, &series)?;
        tracing::info!(path = ?file, removed, "cleaned series in place");
    } else {
        writeln!(writer, "{}", serde_json::to_string_pretty(&series)?)?;
    }
    Ok(())
}
