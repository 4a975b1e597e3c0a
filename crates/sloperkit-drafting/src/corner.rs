//! Shoulder-corner squaring
//!
//! Where the shoulder seam meets the armhole the drafted corner is squared off
//! so that the armhole leaves the shoulder at a right angle. The corner point
//! is replaced by a pair of points a fixed radius away.

use crate::geometry::{right_triangle_leg, Point};
use sloperkit_core::{GeometryError, GeometryResult};

/// Distance the squared point sits from the original corner
pub const CORNER_RADIUS: f64 = 0.25;

/// Result of squaring off a corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquaredCorner {
    /// Directly below the corner, on its vertical
    pub control_point: Point,
    /// Replacement for the corner, level with `control_point`
    pub squared_point: Point,
}

/// Square off the corner at `low` of the shoulder line running to `high`.
///
/// `top` supplies the vertical reference of the construction (the shoulder
/// line's upper horizontal). The slope angle of the `top`/`high` triangle
/// fixes how far inwards the squared point moves; it always lands exactly
/// [`CORNER_RADIUS`] from `low`.
pub fn square_off_corner(top: Point, low: Point, high: Point) -> GeometryResult<SquaredCorner> {
    let rise = top.y - low.y;
    let run = top.x - high.x;
    let slope_length = rise.hypot(run);
    if slope_length == 0.0 {
        return Err(GeometryError::DegenerateVector { x: run, y: rise });
    }

    let slope_angle = (run / slope_length).clamp(-1.0, 1.0).asin();
    let normal_angle = std::f64::consts::FRAC_PI_2 - slope_angle;
    let inset = CORNER_RADIUS * normal_angle.sin();

    let drop = right_triangle_leg(CORNER_RADIUS, inset)?;
    let control_point = Point::new(low.x, low.y - drop);
    let squared_point = Point::new(control_point.x - inset, control_point.y);

    tracing::trace!(
        "squared corner ({:.4}, {:.4}) -> ({:.4}, {:.4})",
        low.x,
        low.y,
        squared_point.x,
        squared_point.y
    );

    Ok(SquaredCorner {
        control_point,
        squared_point,
    })
}
