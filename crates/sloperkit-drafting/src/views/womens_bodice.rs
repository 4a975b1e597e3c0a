//! Women's bodice sloper, front and back
//!
//! Both panels put the origin at centre waist and build upwards. The front
//! shapes the bust with a waist dart (`H` apex, legs `R2`/`Q`); the back
//! carries a waist dart (`Q2`/`S2` around `T`) and a shoulder dart
//! (`X2_2`/`X3_2` around `U`).

use super::{waist_curve_control, Panel};
use crate::bezier::cubic_bezier_length;
use crate::geometry::{
    direction, distance, line_at_x, line_at_y, midpoint, perpendicular, point_on_ray,
    right_triangle_leg, Point,
};
use crate::outline::{Extent, Outline, OutlineBuilder};
use sloperkit_core::{GeometryError, GeometryResult, Measurement, MeasurementSet, Result};

/// Allowance for the squared-off ends of the armhole seam
const ARMHOLE_ALLOWANCE: f64 = 0.5;
/// Inset that squares the armhole off at the side seam
const UNDERARM_SQUARE: f64 = 0.25;

point_set! {
    /// Anchor points of the women's bodice front
    pub struct BodiceFrontPoints {
        /// Centre waist (origin)
        b => "B",
        midbr22 => "midBR22",
        r => "R",
        r2 => "R2",
        /// Bust apex
        h => "H",
        h2 => "H2",
        p => "P",
        q => "Q",
        mideq2 => "midEQ2",
        /// Side waist
        e => "E",
        s => "S",
        /// Underarm
        k => "K",
        k2 => "K2",
        t => "T",
        t2 => "T2",
        t3 => "T3",
        w => "W",
        u => "U",
        v => "V",
        z => "Z",
        /// Low shoulder
        d => "D",
        d2 => "D2",
        /// High shoulder
        c => "C",
        c2 => "C2",
        c3 => "C3",
        x => "X",
        /// Centre top of the high-shoulder line
        y => "Y",
        /// Centre front neck
        a => "A",
        a2 => "A2",
    }
}

point_set! {
    /// Anchor points of the women's bodice back
    pub struct BodiceBackPoints {
        /// Centre waist (origin)
        g => "G",
        midgq22 => "midGQ22",
        q => "Q",
        q2 => "Q2",
        r => "R",
        /// Waist dart apex
        t => "T",
        s => "S",
        s2 => "S2",
        mids2e2 => "midS2E2",
        p => "P",
        /// Side waist
        e => "E",
        n => "N",
        /// Underarm
        k => "K",
        k2 => "K2",
        k3 => "K3",
        o => "O",
        a => "A",
        a2 => "A2",
        v => "V",
        y => "Y",
        /// Low shoulder
        d => "D",
        d2 => "D2",
        x => "X",
        x2 => "X2",
        x3 => "X3",
        x3_2 => "X3_2",
        /// Shoulder dart apex
        u => "U",
        x2_2 => "X2_2",
        /// High shoulder
        c => "C",
        c2 => "C2",
        c3 => "C3",
        /// Centre back neck
        f => "F",
        f2 => "F2",
        /// Centre top of the high-shoulder line
        z => "Z",
    }
}

/// Neckline control on the high-shoulder vertical, scaled down from `c`
/// towards the centre neck by how far `c3` sits across.
///
/// Fails when `c` lies on the centre line, where the scale is undefined.
fn neck_control(c: Point, c3: Point, centre_neck_y: f64) -> GeometryResult<Point> {
    let control = Point::new(c.x, centre_neck_y + (c.y - centre_neck_y) * (c3.x / c.x));
    if c.x == 0.0 || !control.is_finite() {
        return Err(GeometryError::NonFinite {
            quantity: "neckline control".to_string(),
        });
    }
    Ok(control)
}

/// Derive every anchor point of the front panel.
pub fn derive_front_points(m: &MeasurementSet) -> Result<BodiceFrontPoints> {
    let full_length_front = m.require(Measurement::FullLengthFront)?;
    let across_shoulder_front = m.require(Measurement::AcrossShoulderFront)?;
    let center_length_front = m.require(Measurement::CenterLengthFront)?;
    let bust_arc = m.require(Measurement::BustArc)?;
    let shoulder_slope_front = m.require(Measurement::ShoulderSlopeFront)?;
    let bust_depth = m.require(Measurement::BustDepth)?;
    let shoulder_length = m.require(Measurement::ShoulderLength)?;
    let bust_span = m.require(Measurement::BustSpan)?;
    let across_front = m.require(Measurement::AcrossFront)?;
    let new_strap = m.require(Measurement::NewStrap)?;
    let side_length = m.require(Measurement::SideLength)?;
    let waist_arc_front = m.require(Measurement::WaistArcFront)?;

    let b = Point::ORIGIN;
    let y = Point::new(b.x, b.y + full_length_front + 0.125);
    let x = Point::new(y.x + across_shoulder_front + 0.125, y.y);
    let a = Point::new(b.x, b.y + center_length_front);
    let a2 = a.offset(0.25, 0.0);
    let z = Point::new(b.x + bust_arc + 0.25, b.y);

    let slope = shoulder_slope_front + 0.125;
    let d = Point::new(x.x, right_triangle_leg(slope, x.x)?);
    let towards_waist = direction(d, b)?;
    let d2 = point_on_ray(d, towards_waist, 0.25);
    let u = point_on_ray(d, towards_waist, slope - bust_depth);
    let v = Point::new(b.x, u.y);

    let c = Point::new(right_triangle_leg(shoulder_length, x.y - d.y)?, x.y);
    let c3 = line_at_y(c, perpendicular(direction(c, d)?), a.y)?;
    let c2 = neck_control(c, c3, a.y)?;

    let h = Point::new(b.x + bust_span + 0.25, v.y);
    let w = Point::new(a.x, (a.y + v.y) / 2.0);
    let t = Point::new(b.x + across_front + 0.25, w.y);
    let t2 = t.offset(-0.5, 0.0);
    let r = Point::new(b.x + bust_span, b.y);
    let r2 = r.offset(0.0, -0.1875);

    let s = Point::new(z.x, c.y - right_triangle_leg(new_strap + 0.125, z.x - c.x)?);
    let k = Point::new(s.x, b.y + side_length);
    let e = s.offset(1.25, 0.0);
    let k2 = point_on_ray(k, perpendicular(direction(e, k)?), -UNDERARM_SQUARE);
    let t3 = line_at_x(k, k2 - k, t.x)?;

    let ep = waist_arc_front + 0.25 - r.x;
    let p = point_on_ray(e, direction(e, r2)?, ep);
    let q = point_on_ray(h, direction(h, p)?, distance(r2, h));
    let h2 = point_on_ray(h, direction(h, midpoint(q, r2))?, 0.625);

    let mideq2 = waist_curve_control(e, q, 10.0, -10.0)?;
    let midbr22 = waist_curve_control(b, r2, -3.0, 3.0)?;

    Ok(BodiceFrontPoints {
        b,
        midbr22,
        r,
        r2,
        h,
        h2,
        p,
        q,
        mideq2,
        e,
        s,
        k,
        k2,
        t,
        t2,
        t3,
        w,
        u,
        v,
        z,
        d,
        d2,
        c,
        c2,
        c3,
        x,
        y,
        a,
        a2,
    })
}

/// Derive every anchor point of the back panel.
pub fn derive_back_points(m: &MeasurementSet) -> Result<BodiceBackPoints> {
    let full_length_back = m.require(Measurement::FullLengthBack)?;
    let across_shoulder_back = m.require(Measurement::AcrossShoulderBack)?;
    let center_length_back = m.require(Measurement::CenterLengthBack)?;
    let back_arc = m.require(Measurement::BackArc)?;
    let neck_back = m.require(Measurement::NeckBack)?;
    let shoulder_slope_back = m.require(Measurement::ShoulderSlopeBack)?;
    let shoulder_length = m.require(Measurement::ShoulderLength)?;
    let bust_span = m.require(Measurement::BustSpan)?;
    let waist_arc_back = m.require(Measurement::WaistArcBack)?;
    let side_length = m.require(Measurement::SideLength)?;
    let across_back = m.require(Measurement::AcrossBack)?;

    let g = Point::ORIGIN;
    let z = Point::new(g.x, full_length_back);
    let y = Point::new(g.x + across_shoulder_back, z.y);
    let f = Point::new(g.x, g.y + center_length_back);
    let f2 = f.offset(0.25, 0.0);
    let n = Point::new(g.x + back_arc + 0.75, g.y);
    let c = Point::new(z.x + neck_back + 0.125, z.y);

    let v = Point::new(y.x, right_triangle_leg(shoulder_slope_back + 0.125, y.x)?);
    let d = point_on_ray(c, direction(c, v)?, shoulder_length + 0.5);
    let shoulder = direction(c, d)?;
    let d2 = point_on_ray(d, perpendicular(shoulder), 0.25);
    let c3 = line_at_y(c, perpendicular(shoulder), f.y)?;
    let c2 = neck_control(c, c3, f.y)?;

    // 1.5 dart intake plus 0.25 ease
    let q = Point::new(g.x + bust_span, g.y);
    let p = Point::new(g.x + waist_arc_back + 1.75, g.y);
    let s = q.offset(1.5, 0.0);
    let r = midpoint(q, s);
    let e = p.offset(0.0, -0.1875);

    let k = Point::new(n.x, e.y + right_triangle_leg(side_length, e.x - n.x)?);
    let k2 = point_on_ray(k, perpendicular(direction(e, k)?), -UNDERARM_SQUARE);

    let t = Point::new(r.x, r.y + side_length - 1.0);
    let q2 = point_on_ray(t, direction(t, q)?, distance(q, t) + 0.125);
    let s2 = Point::new(2.0 * r.x - q2.x, q2.y);

    let x = midpoint(c, d);
    let u = point_on_ray(x, direction(x, t)?, 3.0);
    let half_shoulder = distance(c, d) / 2.0;
    let x2 = point_on_ray(c, shoulder, half_shoulder - 0.25);
    let x3 = point_on_ray(c, shoulder, half_shoulder + 0.25);
    let x2_2 = point_on_ray(x2, perpendicular(-shoulder), 0.125);
    let x3_2 = x3 + (x2_2 - x2);

    let o = Point::new(f.x, f.y * 0.75);
    let a = Point::new(o.x + across_back + 0.25, o.y);
    let a2 = a.offset(-0.5, 0.0);
    let k3 = Point::new(a.x, k.y);

    let midgq22 = waist_curve_control(g, q2, 10.0, 10.0)?;
    let mids2e2 = waist_curve_control(s2, e, 10.0, 10.0)?;

    Ok(BodiceBackPoints {
        g,
        midgq22,
        q,
        q2,
        r,
        t,
        s,
        s2,
        mids2e2,
        p,
        e,
        n,
        k,
        k2,
        k3,
        o,
        a,
        a2,
        v,
        y,
        d,
        d2,
        x,
        x2,
        x3,
        x3_2,
        u,
        x2_2,
        c,
        c2,
        c3,
        f,
        f2,
        z,
    })
}

/// Seam length of the panel's armhole curve plus the squared-end allowance.
pub fn derive_armhole_length(m: &MeasurementSet, panel: Panel) -> Result<f64> {
    let curve = match panel {
        Panel::Front => {
            let p = derive_front_points(m)?;
            [p.k2, p.t3, p.t2, p.d2]
        }
        Panel::Back => {
            let p = derive_back_points(m)?;
            [p.k2, p.k3, p.a2, p.d2]
        }
    };
    let length = cubic_bezier_length(curve[0], curve[1], curve[2], curve[3]) + ARMHOLE_ALLOWANCE;
    tracing::debug!("women's bodice {} armhole length {:.4}", panel, length);
    Ok(length)
}

/// Front outline: waist with bust dart, side seam, armhole, shoulder, neckline.
pub fn front_outline(p: &BodiceFrontPoints) -> Outline {
    OutlineBuilder::begin(p.b)
        .quadratic_to(p.midbr22, p.r2)
        .line_to(p.h2)
        .line_to(p.q)
        .quadratic_to(p.mideq2, p.e)
        .line_to(p.k)
        .line_to(p.k2)
        .cubic_to(p.t3, p.t2, p.d2)
        .line_to(p.d)
        .line_to(p.c)
        .cubic_to(p.c2, p.c3, p.a2)
        .line_to(p.a)
        .close(Extent::new(p.e.x, p.y.y - p.r2.y))
}

/// Back outline: waist with dart, side seam, armhole, shoulder with dart, neckline.
pub fn back_outline(p: &BodiceBackPoints) -> Outline {
    OutlineBuilder::begin(p.g)
        .quadratic_to(p.midgq22, p.q2)
        .line_to(p.t)
        .line_to(p.s2)
        .quadratic_to(p.mids2e2, p.e)
        .line_to(p.k)
        .line_to(p.k2)
        .cubic_to(p.k3, p.a2, p.d2)
        .line_to(p.d)
        .line_to(p.x3_2)
        .line_to(p.u)
        .line_to(p.x2_2)
        .line_to(p.c)
        .cubic_to(p.c2, p.c3, p.f2)
        .line_to(p.f)
        .close(Extent::new(p.e.x.max(p.n.x), p.z.y - p.q.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neck_control_scaling() {
        let c2 = neck_control(Point::new(4.0, 16.0), Point::new(1.0, 14.0), 14.0).unwrap();
        assert_eq!(c2, Point::new(4.0, 14.5));
    }

    #[test]
    fn test_neck_control_on_centre_line_is_rejected() {
        let err = neck_control(Point::new(0.0, 18.0), Point::new(1.0, 14.0), 14.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incompatible measurements: neckline control is not finite"
        );
    }

    #[test]
    fn test_missing_measurement_is_reported() {
        let m = MeasurementSet::new().with(Measurement::FullLengthFront, 17.0);
        let err = derive_front_points(&m).unwrap_err();
        assert!(err.is_measurement_error());
        assert_eq!(
            err.to_string(),
            "Missing measurement 'across_shoulder_front'"
        );
    }
}
