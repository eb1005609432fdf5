//! Trend command.

use std::io::Write;

use anyhow::Result;
use ts_core::{SeriesError, TimeSeries};

use super::util::{format_number, format_optional};

/// Reports the trend of `series` over `[from, to]`.
///
/// No trend formula is defined for series with two or more samples, so this
/// reports the interval midpoint and average instead of failing.
pub fn run<W: Write>(
    writer: &mut W,
    series: &TimeSeries,
    from: Option<f64>,
    to: Option<f64>,
    precision: usize,
) -> Result<()> {
    match series.trend(from, to) {
        Ok(Some(trend)) => writeln!(writer, "trend: {}", format_number(trend, precision))?,
        Ok(None) => writeln!(writer, "trend: n/a (fewer than two samples)")?,
        Err(SeriesError::TrendUnimplemented { midpoint, average }) => writeln!(
            writer,
            "trend: not implemented (midpoint {}, average {})",
            format_number(midpoint, precision),
            format_optional(average, precision)
        )?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(series: &TimeSeries, from: Option<f64>, to: Option<f64>) -> String {
        let mut output = Vec::new();
        run(&mut output, series, from, to, 1).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn trend_short_series() {
        let mut series = TimeSeries::new();
        series.append_time_point(1.0, 1.0).unwrap();
        assert_eq!(render(&series, None, None), "trend: n/a (fewer than two samples)\n");
    }

    #[test]
    fn trend_reports_midpoint_and_average() {
        let mut series = TimeSeries::new();
        series.append_time_point(0.0, 2.0).unwrap();
        series.append_time_point(10.0, 4.0).unwrap();
        assert_eq!(
            render(&series, None, Some(4.0)),
            "trend: not implemented (midpoint 2.0, average 3.0)\n"
        );
    }
}
