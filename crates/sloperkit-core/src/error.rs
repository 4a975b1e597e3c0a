//! Error handling for SloperKit
//!
//! Provides error types for every layer of the drafting pipeline:
//! - Geometry errors (a construction hit an undefined value)
//! - Measurement errors (missing or malformed body measurements)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a construction step receives values that cannot produce valid
/// pattern geometry. These are never retried or clamped; the measurement
/// combination is simply rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A right-triangle solve was asked for a leg longer than its hypotenuse
    #[error("incompatible measurements: hypotenuse {hypotenuse} is shorter than leg {leg}")]
    IncompatibleMeasurements {
        /// The hypotenuse length supplied to the solve.
        hypotenuse: f64,
        /// The known leg length supplied to the solve.
        leg: f64,
    },

    /// A direction was requested from a zero-length vector
    #[error("incompatible measurements: cannot normalize a zero-length vector ({x}, {y})")]
    DegenerateVector {
        /// X component of the vector.
        x: f64,
        /// Y component of the vector.
        y: f64,
    },

    /// A line never reaches the requested horizontal or vertical
    #[error("incompatible measurements: line is parallel to the {axis} axis")]
    ParallelToAxis {
        /// The axis the line runs along ("x" or "y").
        axis: &'static str,
    },

    /// A value that must be finite came out as NaN or infinity
    #[error("incompatible measurements: {quantity} is not finite")]
    NonFinite {
        /// Name of the offending quantity.
        quantity: String,
    },
}

/// Measurement error type
///
/// Represents problems with the measurement set itself, before any geometry
/// is attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// A measurement needed by a derivation is absent
    #[error("Missing measurement '{field}'")]
    Missing {
        /// The name of the missing measurement.
        field: &'static str,
    },

    /// A measurement is present but not a usable length
    #[error("Invalid measurement '{field}': {value} ({reason})")]
    Invalid {
        /// The name of the measurement.
        field: &'static str,
        /// The offending value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// An unknown measurement name was supplied
    #[error("Unknown measurement name: {name}")]
    UnknownField {
        /// The unrecognised name.
        name: String,
    },

    /// The measurement file could not be parsed
    #[error("Failed to parse measurements: {reason}")]
    Parse {
        /// The reason parsing failed.
        reason: String,
    },

    /// The measurement file has an unsupported extension
    #[error("Measurement file must be .json or .toml: {path}")]
    UnsupportedFormat {
        /// The path that was rejected.
        path: String,
    },
}

/// Main error type for SloperKit
///
/// A unified error type that can represent any error from the library layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Measurement error
    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if the measurement combination was geometrically rejected
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if a measurement was missing or malformed
    pub fn is_measurement_error(&self) -> bool {
        matches!(self, Error::Measurement(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for pure geometric constructions
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::IncompatibleMeasurements {
            hypotenuse: 5.5,
            leg: 6.0,
        };
        assert_eq!(
            err.to_string(),
            "incompatible measurements: hypotenuse 5.5 is shorter than leg 6"
        );

        let err = GeometryError::DegenerateVector { x: 0.0, y: 0.0 };
        assert!(err.to_string().starts_with("incompatible measurements"));

        let err = GeometryError::ParallelToAxis { axis: "y" };
        assert_eq!(
            err.to_string(),
            "incompatible measurements: line is parallel to the y axis"
        );
    }

    #[test]
    fn test_measurement_error_display() {
        let err = MeasurementError::Missing { field: "bicep" };
        assert_eq!(err.to_string(), "Missing measurement 'bicep'");

        let err = MeasurementError::Invalid {
            field: "waist",
            value: -2.0,
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "Invalid measurement 'waist': -2 (must be positive)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GeometryError::ParallelToAxis { axis: "x" }.into();
        assert!(err.is_geometry_error());
        assert!(!err.is_measurement_error());

        let err: Error = MeasurementError::Missing { field: "hip" }.into();
        assert!(err.is_measurement_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));

        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
