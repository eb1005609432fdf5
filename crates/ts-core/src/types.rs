//! Enumerated series metadata and defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Identifier of a series that has not been assigned one.
pub const UNSET_ID: i64 = -1;

/// Default time axis unit (days).
pub const DEFAULT_TIME_UNIT: &str = "d";

/// Default unit class of the values.
pub const DEFAULT_VALUE_UNIT_CLASS: &str = "CARDINAL";

/// Default unit of the values.
pub const DEFAULT_VALUE_UNIT: &str = "";

/// Longest name the external series format can display.
pub const MAX_EXPORT_NAME_LEN: usize = 12;

/// How values are assumed to behave between two samples.
///
/// Only the time-weighted average depends on this; lookups never interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Straight line between neighbouring samples (trapezoidal integration).
    #[default]
    PiecewiseLinear,
    /// The left sample's value holds until the next sample.
    PiecewiseConstant,
}

impl Interpolation {
    /// String representation used in serialized snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PiecewiseLinear => "piecewise_linear",
            Self::PiecewiseConstant => "piecewise_constant",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "piecewise_linear" | "polylined" => Ok(Self::PiecewiseLinear),
            "piecewise_constant" | "constant" => Ok(Self::PiecewiseConstant),
            _ => Err(UnknownVariant {
                kind: "interpolation",
                value: s.to_string(),
            }),
        }
    }
}

/// Temporal behaviour of a series. Carried as metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemporalMode {
    /// The series runs once from its first to its last sample.
    #[default]
    Linear,
    /// The series repeats after its last sample.
    Cyclic,
}

impl TemporalMode {
    /// String representation used in serialized snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cyclic => "cyclic",
        }
    }
}

impl fmt::Display for TemporalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemporalMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "cyclic" => Ok(Self::Cyclic),
            _ => Err(UnknownVariant {
                kind: "temporal mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Serializes and deserializes a string enum through `Display`/`FromStr`,
/// so every alias accepted by `FromStr` is also accepted in snapshots.
macro_rules! serde_via_str {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_str!(Interpolation);
serde_via_str!(TemporalMode);

/// Point-removal strategies understood by [`TimeSeries::clean`](crate::TimeSeries::clean).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CleanPattern {
    /// Drop every interior sample whose value equals both neighbours' values.
    #[default]
    EqualMidPoints,
}

impl CleanPattern {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EqualMidPoints => "equalMidPoints",
        }
    }
}

impl fmt::Display for CleanPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CleanPattern {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equalMidPoints" | "equal_mid_points" => Ok(Self::EqualMidPoints),
            _ => Err(SeriesError::UnsupportedPattern {
                pattern: s.to_string(),
            }),
        }
    }
}

/// Error type for unknown enumeration strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_roundtrip_all_variants() {
        for variant in [Interpolation::PiecewiseLinear, Interpolation::PiecewiseConstant] {
            let parsed: Interpolation = variant.to_string().parse().expect("should parse");
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn interpolation_legacy_names_parse() {
        assert_eq!(
            "Polylined".parse::<Interpolation>().unwrap(),
            Interpolation::PiecewiseLinear
        );
        assert_eq!(
            "Constant".parse::<Interpolation>().unwrap(),
            Interpolation::PiecewiseConstant
        );
    }

    #[test]
    fn interpolation_unknown_errors() {
        let err = "spline".parse::<Interpolation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown interpolation: spline");
    }

    #[test]
    fn interpolation_serde_uses_snake_case() {
        let json = serde_json::to_string(&Interpolation::PiecewiseConstant).unwrap();
        assert_eq!(json, "\"piecewise_constant\"");
        let parsed: Interpolation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Interpolation::PiecewiseConstant);
    }

    #[test]
    fn interpolation_serde_accepts_legacy_names() {
        let parsed: Interpolation = serde_json::from_str("\"Polylined\"").unwrap();
        assert_eq!(parsed, Interpolation::PiecewiseLinear);
        let parsed: Interpolation = serde_json::from_str("\"Constant\"").unwrap();
        assert_eq!(parsed, Interpolation::PiecewiseConstant);

        let err = serde_json::from_str::<Interpolation>("\"spline\"").unwrap_err();
        assert!(err.to_string().contains("unknown interpolation: spline"));
    }

    #[test]
    fn temporal_mode_serde_roundtrip() {
        let json = serde_json::to_string(&TemporalMode::Cyclic).unwrap();
        assert_eq!(json, "\"cyclic\"");
        let parsed: TemporalMode = serde_json::from_str("\"Cyclic\"").unwrap();
        assert_eq!(parsed, TemporalMode::Cyclic);
    }

    #[test]
    fn temporal_mode_from_str() {
        assert_eq!("cyclic".parse::<TemporalMode>().unwrap(), TemporalMode::Cyclic);
        assert_eq!("LINEAR".parse::<TemporalMode>().unwrap(), TemporalMode::Linear);
        assert!("periodic".parse::<TemporalMode>().is_err());
    }

    #[test]
    fn defaults_match_fresh_series_metadata() {
        assert_eq!(Interpolation::default(), Interpolation::PiecewiseLinear);
        assert_eq!(TemporalMode::default(), TemporalMode::Linear);
        assert_eq!(CleanPattern::default(), CleanPattern::EqualMidPoints);
    }

    #[test]
    fn clean_pattern_rejects_unknown_names() {
        assert_eq!(
            "equalMidPoints".parse::<CleanPattern>().unwrap(),
            CleanPattern::EqualMidPoints
        );
        assert_eq!(
            "collapseAll".parse::<CleanPattern>().unwrap_err(),
            SeriesError::UnsupportedPattern {
                pattern: "collapseAll".to_string()
            }
        );
    }
}
