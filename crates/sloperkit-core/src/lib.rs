//! # SloperKit Core
//!
//! Core types and utilities shared by every SloperKit crate: the error
//! hierarchy, the measurement system, and the body-measurement model that
//! feeds pattern drafting.

pub mod error;
pub mod measurements;
pub mod units;

pub use error::{Error, GeometryError, GeometryResult, MeasurementError, Result};
pub use measurements::{Measurement, MeasurementSet};
pub use units::{format_length, MeasurementSystem};
