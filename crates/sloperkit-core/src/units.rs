//! Unit handling
//!
//! Measurement sets are recorded either in inches or centimetres. The drafting
//! constants (eases, control offsets) are inch values, so the unit only
//! affects presentation: the physical size stamped on rendered output and how
//! lengths are formatted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (cm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Imperial
    }
}

impl MeasurementSystem {
    /// Pick the system from the `is_metric` flag carried by a measurement set
    pub fn from_is_metric(is_metric: bool) -> Self {
        if is_metric {
            Self::Metric
        } else {
            Self::Imperial
        }
    }

    /// Unit suffix used for physical SVG dimensions
    pub fn unit_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "cm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format length value for display
///
/// * `value` - Length in the measurement set's own unit
/// * `system` - The system the value is expressed in
pub fn format_length(value: f64, system: MeasurementSystem) -> String {
    format!("{:.3} {}", value, system.unit_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_system_parsing() {
        assert_eq!(
            "metric".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Metric
        );
        assert_eq!(
            "IN".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Imperial
        );
        assert!("furlong".parse::<MeasurementSystem>().is_err());
    }

    #[test]
    fn test_from_is_metric() {
        assert_eq!(
            MeasurementSystem::from_is_metric(true),
            MeasurementSystem::Metric
        );
        assert_eq!(
            MeasurementSystem::from_is_metric(false),
            MeasurementSystem::Imperial
        );
    }

    #[test]
    fn test_format_length() {
        assert_eq!(
            format_length(12.5, MeasurementSystem::Imperial),
            "12.500 in"
        );
        assert_eq!(format_length(31.75, MeasurementSystem::Metric), "31.750 cm");
    }
}
