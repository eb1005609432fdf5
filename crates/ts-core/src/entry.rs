//! Series entries: timed samples and gap markers.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Conversion of loosely typed input into a finite `f64`.
///
/// Strings are trimmed and parsed. NaN and infinities are rejected so that
/// every stored sample compares equal to itself.
pub trait IntoNumber {
    /// Converts `self`, naming `field` in the error on failure.
    fn into_number(self, field: &'static str) -> Result<f64, SeriesError>;
}

fn finite(value: f64, field: &'static str) -> Result<f64, SeriesError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SeriesError::InvalidNumber {
            field,
            input: value.to_string(),
        })
    }
}

impl IntoNumber for f64 {
    fn into_number(self, field: &'static str) -> Result<f64, SeriesError> {
        finite(self, field)
    }
}

impl IntoNumber for f32 {
    fn into_number(self, field: &'static str) -> Result<f64, SeriesError> {
        finite(f64::from(self), field)
    }
}

impl IntoNumber for i32 {
    fn into_number(self, _field: &'static str) -> Result<f64, SeriesError> {
        Ok(f64::from(self))
    }
}

impl IntoNumber for u32 {
    fn into_number(self, _field: &'static str) -> Result<f64, SeriesError> {
        Ok(f64::from(self))
    }
}

impl IntoNumber for i64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "coercion to f64 is the documented behaviour for integer input"
    )]
    fn into_number(self, _field: &'static str) -> Result<f64, SeriesError> {
        Ok(self as f64)
    }
}

impl IntoNumber for &str {
    fn into_number(self, field: &'static str) -> Result<f64, SeriesError> {
        let parsed = self
            .trim()
            .parse::<f64>()
            .map_err(|_| SeriesError::InvalidNumber {
                field,
                input: self.to_string(),
            })?;
        finite(parsed, field).map_err(|_| SeriesError::InvalidNumber {
            field,
            input: self.to_string(),
        })
    }
}

impl IntoNumber for String {
    fn into_number(self, field: &'static str) -> Result<f64, SeriesError> {
        self.as_str().into_number(field)
    }
}

/// A single `(time, value)` observation. Both components are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSample", into = "RawSample")]
pub struct Sample {
    time: f64,
    value: f64,
}

impl Sample {
    /// Creates a sample after checking both components are finite.
    pub fn new(time: f64, value: f64) -> Result<Self, SeriesError> {
        Ok(Self {
            time: finite(time, "time")?,
            value: finite(value, "value")?,
        })
    }

    #[must_use]
    pub const fn time(self) -> f64 {
        self.time
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }
}

// Samples never hold NaN, so equality is reflexive.
impl Eq for Sample {}

impl Hash for Sample {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.time).hash(state);
        canonical_bits(self.value).hash(state);
    }
}

/// Bit pattern with `-0.0` folded onto `0.0`, matching `==` on finite floats.
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 { 0 } else { x.to_bits() }
}

#[derive(Serialize, Deserialize)]
struct RawSample {
    time: f64,
    value: f64,
}

impl TryFrom<RawSample> for Sample {
    type Error = SeriesError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Self::new(raw.time, raw.value)
    }
}

impl From<Sample> for RawSample {
    fn from(sample: Sample) -> Self {
        Self {
            time: sample.time,
            value: sample.value,
        }
    }
}

/// One slot of a series.
///
/// A `Gap` means "no data for this interval": the samples on either side of
/// it are never joined when computing coverage or averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Sample(Sample),
    Gap,
}

impl Entry {
    /// Builds a sample entry, rejecting non-finite components.
    pub fn sample(time: f64, value: f64) -> Result<Self, SeriesError> {
        Sample::new(time, value).map(Self::Sample)
    }

    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    #[must_use]
    pub const fn as_sample(&self) -> Option<Sample> {
        match self {
            Self::Sample(sample) => Some(*sample),
            Self::Gap => None,
        }
    }

    #[must_use]
    pub const fn time(&self) -> Option<f64> {
        match self {
            Self::Sample(sample) => Some(sample.time),
            Self::Gap => None,
        }
    }

    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Sample(sample) => Some(sample.value),
            Self::Gap => None,
        }
    }
}
