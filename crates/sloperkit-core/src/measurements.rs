//! Body measurement sets
//!
//! A [`MeasurementSet`] is the immutable input to every drafting operation. It
//! mirrors the body-measurement record kept for a person: fifty-one named
//! lengths plus the `is_male` / `is_metric` attributes. Any length may be
//! absent on the wire; derivations read through [`MeasurementSet::require`],
//! which fails fast instead of substituting a default.

use crate::error::{Error, MeasurementError, Result};
use crate::units::MeasurementSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

macro_rules! measurement_fields {
    ($( $(#[$doc:meta])* $field:ident => $variant:ident ),* $(,)?) => {
        /// Closed set of measurement names
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Measurement {
            $( $(#[$doc])* $variant, )*
        }

        impl Measurement {
            /// Every measurement, in record order
            pub const ALL: &'static [Measurement] = &[$( Measurement::$variant, )*];

            /// The snake_case field name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Measurement::$variant => stringify!($field), )*
                }
            }
        }

        /// One person's body measurements
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct MeasurementSet {
            /// Drafting convention hint carried from the person record
            #[serde(default)]
            pub is_male: bool,
            /// Whether lengths are centimetres rather than inches
            #[serde(default)]
            pub is_metric: bool,
            $(
                $(#[$doc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<f64>,
            )*
        }

        impl MeasurementSet {
            /// Raw access to a measurement, `None` when absent
            pub fn get(&self, measurement: Measurement) -> Option<f64> {
                match measurement {
                    $( Measurement::$variant => self.$field, )*
                }
            }

            /// Record a measurement
            pub fn set(&mut self, measurement: Measurement, value: f64) {
                match measurement {
                    $( Measurement::$variant => self.$field = Some(value), )*
                }
            }
        }
    };
}

measurement_fields! {
    neck => Neck,
    bust => Bust,
    /// Full chest circumference
    chest => Chest,
    /// Full waist circumference
    waist => Waist,
    abdomen => Abdomen,
    /// Full hip circumference
    hip => Hip,
    center_length_front => CenterLengthFront,
    center_length_back => CenterLengthBack,
    full_length_front => FullLengthFront,
    full_length_back => FullLengthBack,
    /// Centre waist to shoulder tip, front
    shoulder_slope_front => ShoulderSlopeFront,
    /// Centre waist to shoulder tip, back
    shoulder_slope_back => ShoulderSlopeBack,
    /// High shoulder to side waist over the bust
    new_strap => NewStrap,
    bust_depth => BustDepth,
    bust_radius => BustRadius,
    bust_span => BustSpan,
    /// Underarm to side waist
    side_length => SideLength,
    neck_front => NeckFront,
    neck_back => NeckBack,
    shoulder_length => ShoulderLength,
    across_shoulder_front => AcrossShoulderFront,
    across_shoulder_back => AcrossShoulderBack,
    across_front => AcrossFront,
    across_back => AcrossBack,
    bust_arc => BustArc,
    back_arc => BackArc,
    waist_arc_front => WaistArcFront,
    waist_arc_back => WaistArcBack,
    abdomen_arc_front => AbdomenArcFront,
    abdomen_arc_back => AbdomenArcBack,
    hip_arc_front => HipArcFront,
    hip_arc_back => HipArcBack,
    hip_depth_front => HipDepthFront,
    hip_depth_side => HipDepthSide,
    hip_depth_back => HipDepthBack,
    /// Waist to knee
    knee_length => KneeLength,
    /// Waist to ankle
    ankle_length => AnkleLength,
    inseam => Inseam,
    floor_length => FloorLength,
    crotch_length => CrotchLength,
    crotch_depth => CrotchDepth,
    /// Shoulder tip to wrist
    arm_length => ArmLength,
    elbow_length => ElbowLength,
    /// Sleeve cap height
    cap_height => CapHeight,
    bicep => Bicep,
    wrist => Wrist,
    hand => Hand,
    thigh => Thigh,
    knee => Knee,
    calf => Calf,
    ankle => Ankle,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Measurement {
    type Err = MeasurementError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Measurement::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| MeasurementError::UnknownField {
                name: s.to_string(),
            })
    }
}

impl MeasurementSet {
    /// Create an empty measurement set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, measurement: Measurement, value: f64) -> Self {
        self.set(measurement, value);
        self
    }

    /// Build a set from `(measurement, value)` pairs
    pub fn from_pairs(pairs: &[(Measurement, f64)]) -> Self {
        pairs
            .iter()
            .fold(Self::default(), |set, &(m, v)| set.with(m, v))
    }

    /// Fetch a measurement a construction depends on
    ///
    /// Fails with [`MeasurementError::Missing`] when absent and with
    /// [`MeasurementError::Invalid`] when the value is not a finite positive
    /// length.
    pub fn require(&self, measurement: Measurement) -> std::result::Result<f64, MeasurementError> {
        let value = self.get(measurement).ok_or(MeasurementError::Missing {
            field: measurement.as_str(),
        })?;
        check_length(measurement, value)?;
        Ok(value)
    }

    /// Measurement system the lengths are expressed in
    pub fn system(&self) -> MeasurementSystem {
        MeasurementSystem::from_is_metric(self.is_metric)
    }

    /// Number of measurements present
    pub fn len(&self) -> usize {
        Measurement::ALL
            .iter()
            .filter(|m| self.get(**m).is_some())
            .count()
    }

    /// True when no measurement is recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the measurements that are present, in record order
    pub fn present(&self) -> impl Iterator<Item = (Measurement, f64)> + '_ {
        Measurement::ALL
            .iter()
            .filter_map(move |m| self.get(*m).map(|v| (*m, v)))
    }

    /// Reject present values that are not finite positive lengths
    pub fn validate(&self) -> std::result::Result<(), MeasurementError> {
        self.present()
            .try_for_each(|(measurement, value)| check_length(measurement, value))
    }

    /// Parse a measurement set from JSON
    pub fn from_json_str(content: &str) -> std::result::Result<Self, MeasurementError> {
        let set: Self = serde_json::from_str(content).map_err(|e| MeasurementError::Parse {
            reason: e.to_string(),
        })?;
        set.validate()?;
        Ok(set)
    }

    /// Parse a measurement set from TOML
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, MeasurementError> {
        let set: Self = toml::from_str(content).map_err(|e| MeasurementError::Parse {
            reason: e.to_string(),
        })?;
        set.validate()?;
        Ok(set)
    }

    /// Load a measurement set from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let set = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&content)?
        } else {
            return Err(Error::from(MeasurementError::UnsupportedFormat {
                path: path.display().to_string(),
            }));
        };

        tracing::debug!(
            "Loaded {} measurements from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }
}

fn check_length(measurement: Measurement, value: f64) -> std::result::Result<(), MeasurementError> {
    if !value.is_finite() {
        return Err(MeasurementError::Invalid {
            field: measurement.as_str(),
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(MeasurementError::Invalid {
            field: measurement.as_str(),
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}
