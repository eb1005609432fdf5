//! Lookup commands: exact value at a time, and time/value listings.

use std::io::Write;

use anyhow::Result;
use ts_core::{SeriesError, TimeSeries};

use super::util::format_number;

/// Writes the value stored at exactly `time`.
pub fn value_at<W: Write>(
    writer: &mut W,
    series: &TimeSeries,
    time: f64,
    precision: usize,
) -> Result<()> {
    let value = series
        .value_at(time)
        .ok_or(SeriesError::NotFound { time })?;
    writeln!(writer, "{}", format_number(value, precision))?;
    Ok(())
}

/// Writes tab-separated time/value pairs.
///
/// With `raw`, every entry gets a line and gaps appear as `NaN`; otherwise
/// gaps are skipped.
pub fn values<W: Write>(
    writer: &mut W,
    series: &TimeSeries,
    raw: bool,
    precision: usize,
) -> Result<()> {
    let (times, values) = if raw {
        (series.times(), series.values())
    } else {
        (series.time_values(), series.data_values())
    };

    for (time, value) in times.iter().zip(&values) {
        writeln!(
            writer,
            "{}\t{}",
            format_number(*time, precision),
            format_number(*value, precision)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn fixture() -> TimeSeries {
        let mut series = TimeSeries::new();
        series.append_time_point(0.0, 1.0).unwrap();
        series.append_time_point(0.5, 2.0).unwrap();
        series.insert_gap(None).unwrap();
        series.append_time_point(3.0, 4.25).unwrap();
        series
    }

    #[test]
    fn value_at_prints_stored_value() {
        let mut output = Vec::new();
        value_at(&mut output, &fixture(), 0.5, 3).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "2.000\n");
    }

    #[test]
    fn value_at_miss_is_not_found() {
        let mut output = Vec::new();
        let err = value_at(&mut output, &fixture(), 0.25, 3).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SeriesError>(),
            Some(&SeriesError::NotFound { time: 0.25 })
        );
        assert!(output.is_empty());
    }

    #[test]
    fn values_skip_gaps() {
        let mut output = Vec::new();
        values(&mut output, &fixture(), false, 2).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        0.00	1.00
        0.50	2.00
        3.00	4.25
        ");
    }

    #[test]
    fn values_raw_marks_gaps() {
        let mut output = Vec::new();
        values(&mut output, &fixture(), true, 2).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        0.00	1.00
        0.50	2.00
        NaN	NaN
        3.00	4.25
        ");
    }
}
