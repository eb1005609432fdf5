//! The `TimeSeries` data model and its derived statistics.
//!
//! # Ordering
//!
//! Entries are kept in insertion order and never sorted. Coverage and the
//! time-weighted average only ever pair a sample with the previous non-gap
//! sample in that order, so a caller that appends out-of-order times gets
//! sequence-order semantics (possibly negative interval lengths).
//!
//! # Gap-aware projections
//!
//! [`TimeSeries::times`] and [`TimeSeries::values`] return one element per
//! entry and stand in [`GAP_SENTINEL`] for each gap. Use
//! [`TimeSeries::time_values`] and [`TimeSeries::data_values`] when gaps
//! should be dropped, e.g. before plotting or computing statistics.

use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, IntoNumber, Sample};
use crate::error::SeriesError;
use crate::types::{
    CleanPattern, DEFAULT_TIME_UNIT, DEFAULT_VALUE_UNIT, DEFAULT_VALUE_UNIT_CLASS,
    Interpolation, MAX_EXPORT_NAME_LEN, TemporalMode, UNSET_ID,
};

/// Placeholder emitted by [`TimeSeries::times`] and [`TimeSeries::values`] for gaps.
pub const GAP_SENTINEL: f64 = f64::NAN;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Covered duration and time-weighted average of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coverage {
    /// Sum of the intervals between consecutive samples not separated by a gap.
    pub duration: f64,
    /// Integral over the covered intervals divided by `duration`.
    /// `None` only for a series without samples.
    pub average: Option<f64>,
}

/// A named, piecewise-defined numeric series with explicit gaps.
///
/// Equality and hashing only look at the entries; name, id and unit
/// metadata are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeries {
    /// Display name. The external series format shows at most
    /// [`MAX_EXPORT_NAME_LEN`] characters; see [`TimeSeries::export_name`].
    pub name: String,
    /// Identifier, [`UNSET_ID`] until assigned.
    pub id: i64,
    /// Interpolation assumed by the time-weighted average.
    pub interpolation: Interpolation,
    /// Temporal behaviour. Metadata only.
    pub temporal_mode: TemporalMode,
    pub time_unit: String,
    pub value_unit_class: String,
    pub value_unit: String,
    points: Vec<Entry>,
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self {
            name: String::new(),
            id: UNSET_ID,
            interpolation: Interpolation::default(),
            temporal_mode: TemporalMode::default(),
            time_unit: DEFAULT_TIME_UNIT.to_string(),
            value_unit_class: DEFAULT_VALUE_UNIT_CLASS.to_string(),
            value_unit: DEFAULT_VALUE_UNIT.to_string(),
            points: Vec::new(),
        }
    }
}

impl TimeSeries {
    /// Creates an empty series with default metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty series with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a series holding `entries` in the given order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            points: entries.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Sets the interpolation and returns the series.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn points(&self) -> &[Entry] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the samples in insertion order, skipping gaps.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.points.iter().filter_map(Entry::as_sample)
    }

    pub fn sample_count(&self) -> usize {
        self.samples().count()
    }

    pub fn gap_count(&self) -> usize {
        self.points.iter().filter(|entry| entry.is_gap()).count()
    }

    /// The name as the external format would show it.
    pub fn export_name(&self) -> &str {
        match self.name.char_indices().nth(MAX_EXPORT_NAME_LEN) {
            Some((end, _)) => &self.name[..end],
            None => &self.name,
        }
    }

    /// Time of every entry, with [`GAP_SENTINEL`] at each gap.
    ///
    /// The result has one element per entry. See [`TimeSeries::time_values`]
    /// for the gap-free projection.
    pub fn times(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|entry| entry.time().unwrap_or(GAP_SENTINEL))
            .collect()
    }

    /// Value of every entry, with [`GAP_SENTINEL`] at each gap.
    pub fn values(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|entry| entry.value().unwrap_or(GAP_SENTINEL))
            .collect()
    }

    /// Times of the samples only.
    pub fn time_values(&self) -> Vec<f64> {
        self.samples().map(Sample::time).collect()
    }

    /// Values of the samples only.
    pub fn data_values(&self) -> Vec<f64> {
        self.samples().map(Sample::value).collect()
    }

    /// Value of the first sample stored at exactly `time`.
    ///
    /// Matching is exact floating-point equality, so only times that were
    /// stored verbatim are found.
    #[expect(clippy::float_cmp, reason = "lookups match stored times verbatim")]
    pub fn value_at(&self, time: f64) -> Option<f64> {
        self.samples()
            .find(|sample| sample.time() == time)
            .map(Sample::value)
    }

    /// Walks the entries and returns `(duration, integral)` over covered intervals.
    fn integrate(&self) -> (f64, f64) {
        let mut duration = 0.0;
        let mut integral = 0.0;
        let mut prior: Option<Sample> = None;

        for entry in &self.points {
            let Entry::Sample(current) = *entry else {
                prior = None;
                continue;
            };
            if let Some(previous) = prior {
                let dt = current.time() - previous.time();
                duration += dt;
                integral += match self.interpolation {
                    Interpolation::PiecewiseLinear => {
                        (previous.value() + current.value()) / 2.0 * dt
                    }
                    Interpolation::PiecewiseConstant => previous.value() * dt,
                };
            }
            prior = Some(current);
        }

        (duration, integral)
    }

    /// Covered duration and time-weighted average.
    ///
    /// - no entries: duration 0, no average
    /// - a single entry: duration 0, the sample's value (none for a lone gap)
    /// - otherwise: fails with [`SeriesError::DegenerateSeries`] when the
    ///   covered duration sums to zero, and with
    ///   [`SeriesError::NumericOverflow`] when the duration, integral or
    ///   average leaves the finite `f64` range
    pub fn coverage(&self) -> Result<Coverage, SeriesError> {
        match self.points.as_slice() {
            [] => Ok(Coverage {
                duration: 0.0,
                average: None,
            }),
            [only] => Ok(Coverage {
                duration: 0.0,
                average: only.value(),
            }),
            _ => {
                let (duration, integral) = self.integrate();
                if duration == 0.0 {
                    return Err(SeriesError::DegenerateSeries);
                }
                let average = integral / duration;
                if !duration.is_finite() || !integral.is_finite() || !average.is_finite() {
                    return Err(SeriesError::NumericOverflow { duration, integral });
                }
                Ok(Coverage {
                    duration,
                    average: Some(average),
                })
            }
        }
    }

    /// Tuple form of [`TimeSeries::coverage`].
    pub fn total_coverage_and_average(&self) -> Result<(f64, Option<f64>), SeriesError> {
        self.coverage()
            .map(|coverage| (coverage.duration, coverage.average))
    }

    /// Time-weighted average value.
    pub fn average_value(&self) -> Result<Option<f64>, SeriesError> {
        self.coverage().map(|coverage| coverage.average)
    }

    /// Total covered duration. A degenerate series covers zero time.
    pub fn total_coverage(&self) -> f64 {
        self.integrate().0
    }

    /// Trend over `[initial_time, final_time]`, defaulting to the first and
    /// last sample times.
    ///
    /// Returns `Ok(None)` when fewer than two samples exist. No trend formula
    /// is defined for larger series, which fail with
    /// [`SeriesError::TrendUnimplemented`] carrying the midpoint and average.
    pub fn trend(
        &self,
        initial_time: Option<f64>,
        final_time: Option<f64>,
    ) -> Result<Option<f64>, SeriesError> {
        let times = self.time_values();
        if times.len() < 2 {
            return Ok(None);
        }
        let (Some(&first), Some(&last)) = (times.first(), times.last()) else {
            return Ok(None);
        };

        let start = initial_time.unwrap_or(first);
        let end = final_time.unwrap_or(last);
        let midpoint = (start + end) / 2.0;
        let average = self.average_value().ok().flatten();
        tracing::debug!(midpoint, ?average, "trend requested");

        Err(SeriesError::TrendUnimplemented { midpoint, average })
    }

    /// Appends a sample, coercing both inputs to finite numbers.
    pub fn append_time_point(
        &mut self,
        time: impl IntoNumber,
        value: impl IntoNumber,
    ) -> Result<(), SeriesError> {
        let time = time.into_number("time")?;
        let value = value.into_number("value")?;
        self.points.push(Entry::sample(time, value)?);
        Ok(())
    }

    /// Appends a sample at `date`, expressed in days since `reference_date`.
    ///
    /// The elapsed interval is split into whole days (floored) and leftover
    /// whole seconds; sub-second remainders are dropped.
    pub fn append_date_point(
        &mut self,
        date: NaiveDateTime,
        value: impl IntoNumber,
        reference_date: NaiveDateTime,
    ) -> Result<(), SeriesError> {
        self.append_time_point(elapsed_days(date, reference_date), value)
    }

    /// Inserts a gap before `position`, or appends one when `position` is `None`.
    ///
    /// `position == len()` appends; anything larger is rejected rather than clamped.
    pub fn insert_gap(&mut self, position: Option<usize>) -> Result<(), SeriesError> {
        match position {
            None => self.points.push(Entry::Gap),
            Some(index) if index <= self.points.len() => self.points.insert(index, Entry::Gap),
            Some(index) => {
                return Err(SeriesError::IndexOutOfRange {
                    index,
                    len: self.points.len(),
                });
            }
        }
        Ok(())
    }

    /// Removes redundant samples according to `pattern`.
    ///
    /// Returns the number of removed entries.
    pub fn clean(&mut self, pattern: CleanPattern) -> usize {
        let before = self.points.len();
        match pattern {
            CleanPattern::EqualMidPoints => self.remove_equal_mid_points(),
        }
        let removed = before - self.points.len();
        tracing::debug!(%pattern, removed, remaining = self.points.len(), "cleaned series");
        removed
    }

    /// Drops interior samples whose value equals both neighbours' values.
    ///
    /// Walks back to front so removals never shift unvisited indices. A gap
    /// on either side keeps the sample.
    #[expect(clippy::float_cmp, reason = "only exactly equal values are redundant")]
    fn remove_equal_mid_points(&mut self) {
        if self.points.len() < 3 {
            return;
        }
        for i in (1..self.points.len() - 1).rev() {
            let redundant = matches!(
                self.points.get(i - 1..=i + 1),
                Some([Entry::Sample(prev), Entry::Sample(cur), Entry::Sample(next)])
                    if prev.value() == cur.value() && cur.value() == next.value()
            );
            if redundant {
                self.points.remove(i);
            }
        }
    }
}

/// Days from `reference` to `date` with calendar-delta semantics.
#[expect(
    clippy::cast_precision_loss,
    reason = "day counts and seconds-of-day are far below 2^52"
)]
fn elapsed_days(date: NaiveDateTime, reference: NaiveDateTime) -> f64 {
    let delta = date - reference;
    let mut seconds = delta.num_seconds();
    // num_seconds truncates toward zero; floor instead.
    if delta.subsec_nanos() < 0 {
        seconds -= 1;
    }
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let leftover = seconds.rem_euclid(SECONDS_PER_DAY);
    days as f64 + leftover as f64 / SECONDS_PER_DAY as f64
}

impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Eq for TimeSeries {}

impl Hash for TimeSeries {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.hash(state);
    }
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "expected values are exactly representable"
)]
mod tests {
    use super::*;

    use std::hash::DefaultHasher;

    use chrono::NaiveDate;

    fn series(points: &[(f64, f64)]) -> TimeSeries {
        let mut series = TimeSeries::new();
        for &(t, v) in points {
            series.append_time_point(t, v).unwrap();
        }
        series
    }

    fn hash_of(series: &TimeSeries) -> u64 {
        let mut hasher = DefaultHasher::new();
        series.hash(&mut hasher);
        hasher.finish()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    // ========== Construction ==========

    #[test]
    fn new_series_has_default_metadata() {
        let series = TimeSeries::new();
        assert_eq!(series.name, "");
        assert_eq!(series.id, UNSET_ID);
        assert!(series.is_empty());
        assert_eq!(series.interpolation, Interpolation::PiecewiseLinear);
        assert_eq!(series.temporal_mode, TemporalMode::Linear);
        assert_eq!(series.time_unit, "d");
        assert_eq!(series.value_unit_class, "CARDINAL");
        assert_eq!(series.value_unit, "");
    }

    #[test]
    fn instances_never_share_points() {
        let mut a = TimeSeries::new();
        let b = TimeSeries::new();
        a.append_time_point(1.0, 2.0).unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn export_name_truncates_to_twelve_chars() {
        assert_eq!(TimeSeries::named("BH-01 | head").export_name(), "BH-01 | head");
        assert_eq!(
            TimeSeries::named("BH-01 | hydraulic head").export_name(),
            "BH-01 | hydr"
        );
        assert_eq!(TimeSeries::named("Grundwasser°C").export_name(), "Grundwasser°");
    }

    // ========== Coverage and average ==========

    #[test]
    fn empty_series_has_no_average() {
        let series = TimeSeries::new();
        assert_eq!(series.total_coverage_and_average(), Ok((0.0, None)));
        assert_eq!(series.total_coverage(), 0.0);
    }

    #[test]
    fn single_sample_average_is_its_value() {
        let series = series(&[(4.0, 9.5)]);
        assert_eq!(series.total_coverage(), 0.0);
        assert_eq!(series.average_value(), Ok(Some(9.5)));
    }

    #[test]
    fn lone_gap_has_no_average() {
        let mut series = TimeSeries::new();
        series.insert_gap(None).unwrap();
        assert_eq!(series.total_coverage_and_average(), Ok((0.0, None)));
    }

    #[test]
    fn linear_average_uses_trapezoid() {
        let series = series(&[(0.0, 2.0), (10.0, 4.0)]);
        assert_eq!(series.total_coverage(), 10.0);
        assert_eq!(series.average_value(), Ok(Some(3.0)));
    }

    #[test]
    fn constant_average_holds_left_value() {
        let series =
            series(&[(0.0, 2.0), (10.0, 4.0)]).with_interpolation(Interpolation::PiecewiseConstant);
        assert_eq!(series.total_coverage(), 10.0);
        assert_eq!(series.average_value(), Ok(Some(2.0)));
    }

    #[test]
    fn gap_excludes_interval_between_runs() {
        let mut series = series(&[(0.0, 1.0), (5.0, 1.0)]);
        series.insert_gap(None).unwrap();
        series.append_time_point(10.0, 5.0).unwrap();
        series.append_time_point(15.0, 5.0).unwrap();

        let coverage = series.coverage().unwrap();
        assert_eq!(coverage.duration, 10.0);
        assert_eq!(coverage.average, Some(3.0));
    }

    #[test]
    fn zero_duration_is_degenerate() {
        let series = series(&[(3.0, 1.0), (3.0, 2.0)]);
        assert_eq!(series.coverage(), Err(SeriesError::DegenerateSeries));
        assert_eq!(series.average_value(), Err(SeriesError::DegenerateSeries));
        assert_eq!(series.total_coverage(), 0.0);
    }

    #[test]
    fn overflowing_interval_is_an_error() {
        // Both times are finite but their difference is not.
        let wide = series(&[(-1e308, 0.0), (1e308, 0.0)]);
        assert!(matches!(
            wide.coverage(),
            Err(SeriesError::NumericOverflow { .. })
        ));

        // Trapezoid sum of two huge values overflows.
        let tall = series(&[(0.0, 1e308), (1.0, 1e308)]);
        assert!(matches!(
            tall.average_value(),
            Err(SeriesError::NumericOverflow { .. })
        ));

        // Left-hold does not add the values, so the same points stay finite.
        let held = series(&[(0.0, 1e308), (1.0, 1e308)])
            .with_interpolation(Interpolation::PiecewiseConstant);
        assert_eq!(held.average_value(), Ok(Some(1e308)));
    }

    #[test]
    fn sample_followed_by_gap_is_degenerate() {
        let mut series = series(&[(0.0, 1.0)]);
        series.insert_gap(None).unwrap();
        assert_eq!(series.coverage(), Err(SeriesError::DegenerateSeries));
    }

    #[test]
    fn unsorted_times_use_sequence_order() {
        // 0 -> 10 -> 4: intervals +10 and -6.
        let series = series(&[(0.0, 1.0), (10.0, 1.0), (4.0, 1.0)]);
        assert_eq!(series.total_coverage(), 4.0);
        assert_eq!(series.average_value(), Ok(Some(1.0)));
    }

    // ========== Projections and lookup ==========

    #[test]
    fn times_substitute_sentinel_for_gaps() {
        let mut series = series(&[(0.0, 1.0), (1.0, 2.0)]);
        series.insert_gap(Some(1)).unwrap();

        let times = series.times();
        assert_eq!(times.len(), 3);
        assert_eq!(times[0], 0.0);
        assert!(times[1].is_nan());
        assert_eq!(times[2], 1.0);
        assert!(series.values()[1].is_nan());

        assert_eq!(series.time_values(), vec![0.0, 1.0]);
        assert_eq!(series.data_values(), vec![1.0, 2.0]);
    }

    #[test]
    fn value_at_matches_exact_time() {
        let mut series = series(&[(0.0, 1.0), (5.0, 7.5)]);
        series.insert_gap(None).unwrap();
        series.append_time_point(5.0, 8.0).unwrap();

        assert_eq!(series.value_at(5.0), Some(7.5));
        assert_eq!(series.value_at(5.000_001), None);
        assert_eq!(series.value_at(2.5), None);
    }

    // ========== Mutation ==========

    #[test]
    fn append_time_point_coerces_strings() {
        let mut series = TimeSeries::new();
        series.append_time_point("1.5", "  3 ").unwrap();
        series.append_time_point(2_i32, 4.25_f64).unwrap();
        assert_eq!(series.time_values(), vec![1.5, 2.0]);
        assert_eq!(series.data_values(), vec![3.0, 4.25]);
    }

    #[test]
    fn append_time_point_rejects_non_numeric() {
        let mut series = TimeSeries::new();
        let err = series.append_time_point("noon", 1.0).unwrap_err();
        assert_eq!(
            err,
            SeriesError::InvalidNumber {
                field: "time",
                input: "noon".to_string()
            }
        );
        assert!(series.append_time_point(0.0, f64::NAN).is_err());
        assert!(series.is_empty());
    }

    #[test]
    fn append_date_point_one_day_later_is_one() {
        let mut series = TimeSeries::new();
        let reference = at(2024, 2, 28, 0, 0, 0);
        series
            .append_date_point(at(2024, 2, 29, 0, 0, 0), 1.0, reference)
            .unwrap();
        series
            .append_date_point(at(2024, 3, 1, 12, 0, 0), 2.0, reference)
            .unwrap();
        assert_eq!(series.time_values(), vec![1.0, 2.5]);
    }

    #[test]
    fn append_date_point_before_reference_floors_days() {
        let mut series = TimeSeries::new();
        let reference = at(2024, 1, 2, 0, 0, 0);
        series
            .append_date_point(at(2024, 1, 1, 18, 0, 0), 0.0, reference)
            .unwrap();
        assert_eq!(series.time_values(), vec![-0.25]);
    }

    #[test]
    fn append_date_point_drops_sub_second_remainder() {
        let reference = at(2024, 1, 1, 0, 0, 0);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(6, 0, 0, 999)
            .unwrap();
        assert_eq!(elapsed_days(date, reference), 0.25);
    }

    #[test]
    fn insert_gap_at_position() {
        let mut series = series(&[(0.0, 1.0), (1.0, 1.0)]);
        series.insert_gap(Some(0)).unwrap();
        series.insert_gap(Some(3)).unwrap();
        assert!(series.points()[0].is_gap());
        assert!(series.points()[3].is_gap());
        assert_eq!(series.gap_count(), 2);
        assert_eq!(series.sample_count(), 2);
    }

    #[test]
    fn insert_gap_rejects_out_of_range() {
        let mut series = series(&[(0.0, 1.0)]);
        assert_eq!(
            series.insert_gap(Some(5)),
            Err(SeriesError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(series.len(), 1);
    }

    // ========== Clean ==========

    #[test]
    fn clean_collapses_flat_interior_run() {
        let mut cleaned = series(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 7.0)]);
        assert_eq!(cleaned.clean(CleanPattern::EqualMidPoints), 1);
        assert_eq!(cleaned, series(&[(0.0, 5.0), (2.0, 5.0), (3.0, 7.0)]));

        assert_eq!(cleaned.clean(CleanPattern::EqualMidPoints), 0);
        assert_eq!(cleaned, series(&[(0.0, 5.0), (2.0, 5.0), (3.0, 7.0)]));
    }

    #[test]
    fn clean_reduces_long_flat_run_to_endpoints() {
        let mut cleaned = series(&[(0.0, 2.0), (1.0, 2.0), (2.0, 2.0), (3.0, 2.0), (4.0, 2.0)]);
        assert_eq!(cleaned.clean(CleanPattern::default()), 3);
        assert_eq!(cleaned.time_values(), vec![0.0, 4.0]);
    }

    #[test]
    fn clean_never_merges_across_gap() {
        let mut cleaned = series(&[(0.0, 1.0), (1.0, 1.0)]);
        cleaned.insert_gap(None).unwrap();
        cleaned.append_time_point(2.0, 1.0).unwrap();
        cleaned.append_time_point(3.0, 1.0).unwrap();
        let before = cleaned.clone();

        assert_eq!(cleaned.clean(CleanPattern::EqualMidPoints), 0);
        assert_eq!(cleaned, before);
    }

    #[test]
    fn clean_keeps_average_unchanged() {
        let mut cleaned = series(&[(0.0, 3.0), (2.0, 3.0), (4.0, 3.0), (6.0, 9.0)]);
        let average = cleaned.average_value().unwrap();
        cleaned.clean(CleanPattern::EqualMidPoints);
        assert_eq!(cleaned.average_value().unwrap(), average);
    }

    // ========== Trend ==========

    #[test]
    fn trend_needs_two_samples() {
        assert_eq!(TimeSeries::new().trend(None, None), Ok(None));
        assert_eq!(series(&[(1.0, 1.0)]).trend(None, None), Ok(None));
    }

    #[test]
    fn trend_reports_unimplemented_with_midpoint() {
        let series = series(&[(0.0, 2.0), (10.0, 4.0)]);
        assert_eq!(
            series.trend(None, None),
            Err(SeriesError::TrendUnimplemented {
                midpoint: 5.0,
                average: Some(3.0)
            })
        );
        assert_eq!(
            series.trend(Some(2.0), None),
            Err(SeriesError::TrendUnimplemented {
                midpoint: 6.0,
                average: Some(3.0)
            })
        );
    }

    // ========== Equality and hashing ==========

    #[test]
    fn identical_appends_are_equal_and_hash_equal() {
        let mut a = series(&[(0.0, 1.0), (1.0, 2.5)]);
        let mut b = series(&[(0.0, 1.0), (1.0, 2.5)]);
        a.name = "left".to_string();
        b.id = 42;
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.append_time_point(2.0, 0.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn gap_position_matters_for_equality() {
        let mut a = series(&[(0.0, 1.0), (1.0, 1.0)]);
        let mut b = a.clone();
        a.insert_gap(Some(1)).unwrap();
        b.insert_gap(None).unwrap();
        assert_ne!(a, b);
    }

    // ========== Serde ==========

    #[test]
    fn serde_snapshot_of_series() {
        let mut series = series(&[(0.0, 1.0)]);
        series.name = "BH-01".to_string();
        series.insert_gap(None).unwrap();
        let json = serde_json::to_string_pretty(&series).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "name": "BH-01",
          "id": -1,
          "interpolation": "piecewise_linear",
          "temporal_mode": "linear",
          "time_unit": "d",
          "value_unit_class": "CARDINAL",
          "value_unit": "",
          "points": [
            {
              "type": "sample",
              "time": 0.0,
              "value": 1.0
            },
            {
              "type": "gap"
            }
          ]
        }
        "#);
    }

    #[test]
    fn deserialize_fills_missing_metadata() {
        let json = r#"{"points":[{"type":"sample","time":1,"value":2},{"type":"gap"}]}"#;
        let series: TimeSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.id, UNSET_ID);
        assert_eq!(series.time_unit, "d");
        assert_eq!(series.len(), 2);
        assert_eq!(series.value_at(1.0), Some(2.0));
    }
}
