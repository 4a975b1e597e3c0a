//! Numeric primitives for pattern construction.
//!
//! Every anchor point of every garment view is produced by composing the
//! handful of operations in this module. Points are never edited in place:
//! each construction step returns a fresh value.

use serde::{Deserialize, Serialize};
use sloperkit_core::{GeometryError, GeometryResult};
use std::ops::{Add, Mul, Neg, Sub};

/// Represents a 2D point (or displacement) in the drafting plane.
///
/// Coordinates share the unit of the measurement set they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// Length of this point read as a vector from the origin.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Same point shifted by `dx`, `dy`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Point mirrored across the vertical axis.
    pub fn mirror_x(&self) -> Point {
        Point::new(-self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn to_lyon(self) -> lyon::math::Point {
        lyon::math::point(self.x as f32, self.y as f32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Midpoint of the segment `a`-`b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Unit vector in the direction of `v`.
pub fn normalize(v: Point) -> GeometryResult<Point> {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return Err(GeometryError::DegenerateVector { x: v.x, y: v.y });
    }
    Ok(Point::new(v.x / len, v.y / len))
}

/// Unit vector pointing from `from` towards `to`.
pub fn direction(from: Point, to: Point) -> GeometryResult<Point> {
    normalize(to - from)
}

/// Rotates a unit vector a quarter turn clockwise: `(v.y, -v.x)`.
///
/// For a direction running up and to the right this yields the normal that
/// points down and to the right. Callers pick the side by the order in which
/// they build the direction, never by flipping signs afterwards.
pub fn perpendicular(v: Point) -> Point {
    Point::new(v.y, -v.x)
}

/// Solves the missing leg of a right triangle: `sqrt(hypotenuse² - leg²)`.
///
/// The hypotenuse must be at least as long as the known leg.
pub fn right_triangle_leg(hypotenuse: f64, leg: f64) -> GeometryResult<f64> {
    if !(hypotenuse >= leg.abs()) {
        return Err(GeometryError::IncompatibleMeasurements { hypotenuse, leg });
    }
    Ok((hypotenuse * hypotenuse - leg * leg).sqrt())
}

/// Point at signed `distance` from `origin` along `unit_direction`.
pub fn point_on_ray(origin: Point, unit_direction: Point, distance: f64) -> Point {
    origin + unit_direction * distance
}

/// Rotates `point` about `pivot` by `theta` radians (counter-clockwise).
pub fn rotate_about_pivot(point: Point, pivot: Point, theta: f64) -> Point {
    let (sin_t, cos_t) = theta.sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(
        pivot.x + dx * cos_t - dy * sin_t,
        pivot.y + dx * sin_t + dy * cos_t,
    )
}

/// Where the line through `origin` with direction `dir` crosses the horizontal `y`.
pub fn line_at_y(origin: Point, dir: Point, y: f64) -> GeometryResult<Point> {
    if dir.y == 0.0 {
        return Err(GeometryError::ParallelToAxis { axis: "x" });
    }
    let t = (y - origin.y) / dir.y;
    Ok(Point::new(origin.x + t * dir.x, y))
}

/// Where the line through `origin` with direction `dir` crosses the vertical `x`.
pub fn line_at_x(origin: Point, dir: Point, x: f64) -> GeometryResult<Point> {
    if dir.x == 0.0 {
        return Err(GeometryError::ParallelToAxis { axis: "y" });
    }
    let t = (x - origin.x) / dir.x;
    Ok(Point::new(x, origin.y + t * dir.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert!(matches!(
            normalize(Point::ORIGIN),
            Err(GeometryError::DegenerateVector { .. })
        ));
        let n = normalize(Point::new(0.0, -2.0)).unwrap();
        assert_eq!(n, Point::new(0.0, -1.0));
    }

    #[test]
    fn test_perpendicular_handedness() {
        assert_eq!(perpendicular(Point::new(1.0, 0.0)), Point::new(0.0, -1.0));
        assert_eq!(perpendicular(Point::new(0.0, 1.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_right_triangle_leg() {
        assert_eq!(right_triangle_leg(5.0, 3.0).unwrap(), 4.0);
        assert_eq!(right_triangle_leg(7.25, 7.25).unwrap(), 0.0);
        assert_eq!(
            right_triangle_leg(5.5, 6.0),
            Err(GeometryError::IncompatibleMeasurements {
                hypotenuse: 5.5,
                leg: 6.0
            })
        );
        assert!(right_triangle_leg(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_point_on_ray() {
        let p = point_on_ray(Point::new(1.0, 1.0), Point::new(0.0, 1.0), -0.25);
        assert_eq!(p, Point::new(1.0, 0.75));
    }

    #[test]
    fn test_rotate_about_pivot() {
        let p = rotate_about_pivot(Point::new(2.0, 1.0), Point::new(1.0, 1.0), FRAC_PI_2);
        assert!(approx(p, Point::new(1.0, 2.0)));
        let same = rotate_about_pivot(Point::new(2.0, 1.0), Point::new(1.0, 1.0), 0.0);
        assert_eq!(same, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_line_crossings() {
        let p = line_at_y(Point::new(0.0, 0.0), Point::new(1.0, 2.0), 4.0).unwrap();
        assert_eq!(p, Point::new(2.0, 4.0));
        let p = line_at_x(Point::new(0.0, 0.0), Point::new(1.0, 2.0), 3.0).unwrap();
        assert_eq!(p, Point::new(3.0, 6.0));
        assert!(line_at_y(Point::ORIGIN, Point::new(1.0, 0.0), 1.0).is_err());
        assert!(line_at_x(Point::ORIGIN, Point::new(0.0, 1.0), 1.0).is_err());
    }
}
