//! Per-view pattern derivations
//!
//! Each module turns a [`MeasurementSet`](sloperkit_core::MeasurementSet) into
//! a typed point struct (`derive_points`) and assembles those points into a
//! closed [`Outline`](crate::outline::Outline) (`outline`). The torso and
//! bodice modules also expose `derive_armhole_length`, the seam length the
//! matching sleeve cap has to fit.

pub mod mens_sleeve;
pub mod mens_torso;
pub mod pant_front;
pub mod womens_bodice;
pub mod womens_skirt;
pub mod womens_sleeve;

use crate::geometry::{direction, midpoint, Point};
use serde::{Deserialize, Serialize};
use sloperkit_core::GeometryResult;
use std::fmt;

/// Front or back panel of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Front,
    Back,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Front => write!(f, "front"),
            Panel::Back => write!(f, "back"),
        }
    }
}

/// Control point for a waistline curve between `from` and `to`.
///
/// Starts at the chord midpoint and moves by `(reach_x, reach_y)` scaled by
/// the vertical component of the unit chord from `to` towards `from`. A level
/// chord yields its own midpoint.
pub(crate) fn waist_curve_control(
    from: Point,
    to: Point,
    reach_x: f64,
    reach_y: f64,
) -> GeometryResult<Point> {
    let chord = direction(to, from)?;
    Ok(midpoint(from, to).offset(reach_x * chord.y, reach_y * chord.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waist_curve_control_follows_chord_slope() {
        let ctrl = waist_curve_control(Point::new(0.0, 0.0), Point::new(3.0, -4.0), 10.0, -10.0)
            .unwrap();
        // unit chord towards `from` is (-0.6, 0.8)
        assert!((ctrl.x - 9.5).abs() < 1e-12);
        assert!((ctrl.y - -10.0).abs() < 1e-12);
    }

    #[test]
    fn test_level_chord_keeps_midpoint() {
        let ctrl = waist_curve_control(Point::new(0.0, 1.0), Point::new(4.0, 1.0), -3.0, 3.0)
            .unwrap();
        assert_eq!(ctrl, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_zero_length_chord_is_rejected() {
        let p = Point::new(2.0, 2.0);
        let err = waist_curve_control(p, p, 10.0, 10.0).unwrap_err();
        assert!(err.to_string().starts_with("incompatible measurements"));
    }
}
