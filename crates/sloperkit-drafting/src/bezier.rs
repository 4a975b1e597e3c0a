//! Cubic Bezier curves and arc length
//!
//! Armhole seam lengths are measured as the arc length of a cubic Bezier,
//! integrated numerically with adaptive Gauss-Kronrod (7/15 point) quadrature.

use crate::geometry::Point;

/// Relative accuracy target for arc-length estimates
pub const ARC_LENGTH_TOLERANCE: f64 = 1e-6;

/// Absolute floor below which an interval's error estimate is accepted
const ABSOLUTE_TOLERANCE: f64 = 1e-12;

const MAX_DEPTH: u32 = 32;

// Kronrod abscissae on [0, 1) of the symmetric 15-point rule; odd indices are
// shared with the embedded 7-point Gauss rule.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_2,
    0.140_653_259_715_525_9,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_8,
];

const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// A cubic Bezier curve defined by its start, two control points and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Point on the curve at parameter `t` in [0, 1].
    pub fn sample(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.end.x,
            a * self.start.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.end.y,
        )
    }

    /// First derivative with respect to `t`.
    pub fn derivative(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = 3.0 * mt * mt;
        let b = 6.0 * mt * t;
        let c = 3.0 * t * t;
        let d01 = self.ctrl1 - self.start;
        let d12 = self.ctrl2 - self.ctrl1;
        let d23 = self.end - self.ctrl2;
        Point::new(
            a * d01.x + b * d12.x + c * d23.x,
            a * d01.y + b * d12.y + c * d23.y,
        )
    }

    /// Same curve traversed from `end` to `start`.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.ctrl2, self.ctrl1, self.start)
    }

    /// Arc length, accurate to [`ARC_LENGTH_TOLERANCE`] relative error.
    pub fn arc_length(&self) -> f64 {
        integrate(|t| self.derivative(t).length(), 0.0, 1.0)
    }
}

/// Arc length of the cubic Bezier `p0, c1, c2, p3`.
pub fn cubic_bezier_length(p0: Point, c1: Point, c2: Point, p3: Point) -> f64 {
    CubicBezier::new(p0, c1, c2, p3).arc_length()
}

fn gauss_kronrod<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> (f64, f64) {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f(center);
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for (i, (&x, &wk)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half * x;
        let pair = f(center - dx) + f(center + dx);
        kronrod += wk * pair;
        if i % 2 == 1 {
            gauss += WG[i / 2] * pair;
        }
    }

    let kronrod = kronrod * half;
    let gauss = gauss * half;
    (kronrod, (kronrod - gauss).abs())
}

fn integrate<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> f64 {
    let (whole, err) = gauss_kronrod(&f, a, b);
    let tolerance = (ARC_LENGTH_TOLERANCE * whole.abs()).max(ABSOLUTE_TOLERANCE);
    if err <= tolerance {
        return whole;
    }
    refine(&f, a, b, tolerance, 0)
}

fn refine<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tolerance: f64, depth: u32) -> f64 {
    let mid = 0.5 * (a + b);
    let (left, left_err) = gauss_kronrod(f, a, mid);
    let (right, right_err) = gauss_kronrod(f, mid, b);

    if left_err + right_err <= tolerance || depth >= MAX_DEPTH {
        return left + right;
    }

    let half_tol = 0.5 * tolerance;
    let left = if left_err <= half_tol {
        left
    } else {
        refine(f, a, mid, half_tol, depth + 1)
    };
    let right = if right_err <= half_tol {
        right
    } else {
        refine(f, mid, b, half_tol, depth + 1)
    };
    left + right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line_length() {
        let len = cubic_bezier_length(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        );
        assert!((len - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_curve_has_zero_length() {
        let p = Point::new(2.0, -1.0);
        assert_eq!(cubic_bezier_length(p, p, p, p), 0.0);
    }

    #[test]
    fn test_quarter_circle_approximation() {
        // Standard four-arc circle approximation, radius 1.
        let k = 0.552_284_749_830_793_4;
        let len = cubic_bezier_length(
            Point::new(1.0, 0.0),
            Point::new(1.0, k),
            Point::new(k, 1.0),
            Point::new(0.0, 1.0),
        );
        let quarter = std::f64::consts::FRAC_PI_2;
        assert!((len - quarter).abs() / quarter < 1e-3);
    }

    #[test]
    fn test_endpoints_of_sample() {
        let curve = CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(curve.sample(0.0), curve.start);
        assert_eq!(curve.sample(1.0), curve.end);
        // Chord is a lower bound on arc length.
        assert!(curve.arc_length() > 4.0);
    }

    #[test]
    fn test_cusp_converges() {
        let len = cubic_bezier_length(
            Point::new(0.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(0.0, 3.0),
            Point::new(3.0, 0.0),
        );
        assert!(len.is_finite());
        assert!(len > 3.0);
    }
}
