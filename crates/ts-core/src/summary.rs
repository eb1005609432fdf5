//! Per-series summaries for batch analysis.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::SeriesError;
use crate::series::TimeSeries;

/// Headline numbers for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub name: String,
    pub id: i64,
    pub samples: usize,
    pub gaps: usize,
    /// Total covered duration, in `time_unit`.
    pub coverage: f64,
    pub time_unit: String,
    /// Time-weighted average. `None` for empty, degenerate or overflowing series.
    pub average: Option<f64>,
}

/// Summarizes a single series.
pub fn summarize(series: &TimeSeries) -> SeriesSummary {
    let average = match series.average_value() {
        Ok(average) => average,
        Err(SeriesError::DegenerateSeries) => {
            tracing::debug!(name = %series.name, "series covers zero duration, no average");
            None
        }
        Err(err) => {
            tracing::warn!(name = %series.name, error = %err, "failed to compute average");
            None
        }
    };

    SeriesSummary {
        name: series.name.clone(),
        id: series.id,
        samples: series.sample_count(),
        gaps: series.gap_count(),
        coverage: series.total_coverage(),
        time_unit: series.time_unit.clone(),
        average,
    }
}

/// Summarizes many independent series in parallel, preserving input order.
pub fn summarize_all(series: &[TimeSeries]) -> Vec<SeriesSummary> {
    series.par_iter().map(summarize).collect()
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "expected values are exactly representable"
)]
mod tests {
    use super::*;

    fn series(name: &str, points: &[(f64, f64)]) -> TimeSeries {
        let mut series = TimeSeries::named(name);
        for &(t, v) in points {
            series.append_time_point(t, v).unwrap();
        }
        series
    }

    #[test]
    fn summary_counts_samples_and_gaps() {
        let mut s = series("well", &[(0.0, 1.0), (5.0, 1.0)]);
        s.insert_gap(None).unwrap();
        s.append_time_point(10.0, 5.0).unwrap();
        s.append_time_point(15.0, 5.0).unwrap();

        let summary = summarize(&s);
        assert_eq!(summary.name, "well");
        assert_eq!(summary.samples, 4);
        assert_eq!(summary.gaps, 1);
        assert_eq!(summary.coverage, 10.0);
        assert_eq!(summary.average, Some(3.0));
    }

    #[test]
    fn degenerate_series_has_no_average() {
        let summary = summarize(&series("flat", &[(2.0, 1.0), (2.0, 3.0)]));
        assert_eq!(summary.coverage, 0.0);
        assert_eq!(summary.average, None);
    }

    #[test]
    fn overflowing_series_has_no_average() {
        let summary = summarize(&series("huge", &[(0.0, 1e308), (1.0, 1e308)]));
        assert_eq!(summary.coverage, 1.0);
        assert_eq!(summary.average, None);
    }

    #[test]
    fn summarize_all_preserves_order() {
        let batch: Vec<TimeSeries> = (0..50)
            .map(|i| series(&format!("s{i}"), &[(0.0, f64::from(i)), (1.0, f64::from(i))]))
            .collect();

        let summaries = summarize_all(&batch);
        assert_eq!(summaries.len(), 50);
        for (i, summary) in summaries.iter().enumerate() {
            assert_eq!(summary.name, format!("s{i}"));
        }
        assert_eq!(summaries[7].average, Some(7.0));
    }
}
