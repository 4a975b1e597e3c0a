//! Unisex pant front sloper
//!
//! The waist sits at the origin and the leg hangs down the negative y axis
//! through the hip, crotch, knee and ankle lines. The crotch extension runs
//! to negative x; the side seam is on the positive side.

use crate::geometry::{direction, midpoint, perpendicular, point_on_ray, Point};
use crate::outline::{Extent, Outline, OutlineBuilder};
use sloperkit_core::{Measurement, MeasurementSet, Result};

/// Inward bow of the inseam between knee and crotch
const INSEAM_CURVE: f64 = 0.5;

point_set! {
    /// Anchor points of the pant front
    pub struct PantFrontPoints {
        /// Centre waist (origin)
        a => "A",
        /// Crotch line
        b => "B",
        /// Ankle line
        c => "C",
        /// Knee line
        d => "D",
        /// Hip line
        e => "E",
        b2 => "B2",
        e2 => "E2",
        /// Side hip
        e3 => "E3",
        /// Crotch point
        b3 => "B3",
        /// Centre front waist
        a2 => "A2",
        /// Side waist
        a3 => "A3",
        c2 => "C2",
        c3 => "C3",
        d2 => "D2",
        d3 => "D3",
        hip_curve => "A3E3",
        inseam_curve => "D2B3",
    }
}

/// Derive every anchor point of the pant front.
pub fn derive_points(m: &MeasurementSet) -> Result<PantFrontPoints> {
    let crotch_depth = m.require(Measurement::CrotchDepth)?;
    let inseam = m.require(Measurement::Inseam)?;
    let knee_length = m.require(Measurement::KneeLength)?;
    let hip_depth_front = m.require(Measurement::HipDepthFront)?;
    let hip = m.require(Measurement::Hip)?;
    let waist = m.require(Measurement::Waist)?;
    let ankle = m.require(Measurement::Ankle)?;
    let knee = m.require(Measurement::Knee)?;

    let a = Point::ORIGIN;
    let b = Point::new(a.x, a.y - crotch_depth);
    let c = Point::new(b.x, b.y - inseam);
    let d = Point::new(a.x, a.y - knee_length);
    let e = Point::new(a.x, a.y - hip_depth_front);

    let b2 = Point::new(b.x - hip / 8.0 + 0.5, b.y);
    let e2 = Point::new(b2.x, e.y);
    let e3 = Point::new(e2.x + hip / 4.0 + 1.0, e2.y);
    let b3 = Point::new(b2.x * 1.5, b2.y);
    let a2 = Point::new(b2.x + 0.5, a.y);
    let a3 = Point::new(a2.x + waist / 4.0 + 0.1, a.y);

    let c2 = Point::new(c.x - ankle / 4.0, c.y);
    let c3 = Point::new(c.x + ankle / 4.0, c.y);
    let d2 = Point::new(d.x - knee / 4.0, d.y);
    let d3 = Point::new(d.x + knee / 4.0, d.y);

    let hip_curve = Point::new(e3.x, (a3.y + e3.y) / 2.0);
    let inseam_curve = point_on_ray(
        midpoint(d2, b3),
        perpendicular(direction(d2, b3)?),
        INSEAM_CURVE,
    );

    Ok(PantFrontPoints {
        a,
        b,
        c,
        d,
        e,
        b2,
        e2,
        e3,
        b3,
        a2,
        a3,
        c2,
        c3,
        d2,
        d3,
        hip_curve,
        inseam_curve,
    })
}

/// Assemble the outline: waist, side seam, hem, inseam, crotch curve, centre front.
pub fn outline(p: &PantFrontPoints) -> Outline {
    OutlineBuilder::begin(p.a2)
        .line_to(p.a3)
        .quadratic_to(p.hip_curve, p.e3)
        .line_to(p.d3)
        .line_to(p.c3)
        .line_to(p.c2)
        .line_to(p.d2)
        .quadratic_to(p.inseam_curve, p.b3)
        .quadratic_to(p.b2, p.e2)
        .close(Extent::new(p.e3.x - p.b3.x, p.a.y - p.c.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements() -> MeasurementSet {
        MeasurementSet::from_pairs(&[
            (Measurement::CrotchDepth, 10.0),
            (Measurement::Inseam, 30.0),
            (Measurement::KneeLength, 22.0),
            (Measurement::HipDepthFront, 8.0),
            (Measurement::Hip, 40.0),
            (Measurement::Waist, 32.0),
            (Measurement::Ankle, 10.0),
            (Measurement::Knee, 16.0),
        ])
    }

    #[test]
    fn test_reference_lines() {
        let p = derive_points(&measurements()).unwrap();
        assert_eq!(p.b, Point::new(0.0, -10.0));
        assert_eq!(p.c, Point::new(0.0, -40.0));
        assert_eq!(p.b2, Point::new(-4.5, -10.0));
        assert_eq!(p.b3, Point::new(-6.75, -10.0));
        assert_eq!(p.e3, Point::new(6.5, -8.0));
        assert_eq!(p.a2, Point::new(-4.0, 0.0));
        assert_eq!(p.a3.y, 0.0);
        assert_eq!(p.d2, Point::new(-4.0, -22.0));
    }

    #[test]
    fn test_inseam_bows_towards_centre() {
        let p = derive_points(&measurements()).unwrap();
        let chord_mid = midpoint(p.d2, p.b3);
        assert!(p.inseam_curve.x > chord_mid.x);
    }

    #[test]
    fn test_outline_extent() {
        let outline = outline(&derive_points(&measurements()).unwrap());
        assert!(outline.is_closed());
        assert_eq!(outline.extent().width, 13.25);
        assert_eq!(outline.extent().height, 40.0);
    }
}
