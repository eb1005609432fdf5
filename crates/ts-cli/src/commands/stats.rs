//! Stats command: coverage and time-weighted average per series.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use ts_core::{SeriesSummary, TimeSeries, summarize_all};

use super::util::{format_number, format_optional, load_many};

/// One JSONL row of `tsa stats --json`.
#[derive(Serialize)]
struct StatsRow<'a> {
    file: &'a str,
    #[serde(flatten)]
    summary: &'a SeriesSummary,
}

/// Loads every file and reports its summary.
pub fn run<W: Write>(writer: &mut W, files: &[PathBuf], json: bool, precision: usize) -> Result<()> {
    let (labels, series): (Vec<String>, Vec<TimeSeries>) = load_many(files)
        .into_iter()
        .map(|(path, series)| (path.display().to_string(), series))
        .unzip();

    if series.is_empty() {
        anyhow::bail!("no readable series among {} file(s)", files.len());
    }

    report(writer, &labels, &series, json, precision)
}

/// Writes summaries for already loaded series, labelled by source file.
///
/// `labels` and `series` are parallel slices.
pub fn report<W: Write>(
    writer: &mut W,
    labels: &[String],
    series: &[TimeSeries],
    json: bool,
    precision: usize,
) -> Result<()> {
    let summaries = summarize_all(series);

    for (file, summary) in labels.iter().zip(&summaries) {
        if json {
            let row = StatsRow { file, summary };
            writeln!(writer, "{}", serde_json::to_string(&row)?)?;
        } else {
            let label = if summary.name.is_empty() {
                file.as_str()
            } else {
                summary.name.as_str()
            };
            writeln!(
                writer,
                "{label}: samples={} gaps={} coverage={} {} average={}",
                summary.samples,
                summary.gaps,
                format_number(summary.coverage, precision),
                summary.time_unit,
                format_optional(summary.average, precision),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn fixtures() -> (Vec<String>, Vec<TimeSeries>) {
        let mut well = TimeSeries::named("BH-01");
        well.append_time_point(0.0, 1.0).unwrap();
        well.append_time_point(5.0, 1.0).unwrap();
        well.insert_gap(None).unwrap();
        well.append_time_point(10.0, 5.0).unwrap();
        well.append_time_point(15.0, 5.0).unwrap();

        let mut flat = TimeSeries::new();
        flat.append_time_point(2.0, 1.0).unwrap();
        flat.append_time_point(2.0, 3.0).unwrap();

        (
            vec!["well.json".to_string(), "flat.json".to_string()],
            vec![well, flat],
        )
    }

    #[test]
    fn stats_human_output() {
        let mut output = Vec::new();
        let (labels, series) = fixtures();
        report(&mut output, &labels, &series, false, 2).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        BH-01: samples=4 gaps=1 coverage=10.00 d average=3.00
        flat.json: samples=2 gaps=0 coverage=0.00 d average=n/a
        ");
    }

    #[test]
    fn stats_json_output() {
        let mut output = Vec::new();
        let (labels, series) = fixtures();
        report(&mut output, &labels, &series, true, 2).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r#"
        {"file":"well.json","name":"BH-01","id":-1,"samples":4,"gaps":1,"coverage":10.0,"time_unit":"d","average":3.0}
        {"file":"flat.json","name":"","id":-1,"samples":2,"gaps":0,"coverage":0.0,"time_unit":"d","average":null}
        "#);
    }

    #[test]
    fn stats_run_fails_without_readable_files() {
        let temp = tempfile::tempdir().unwrap();
        let mut output = Vec::new();
        let result = run(&mut output, &[temp.path().join("missing.json")], false, 2);
        assert!(result.is_err());
    }
}
