//! Women's skirt sloper, front and back
//!
//! Both panels share the centre line: hem at the origin `S`, waist at `T`,
//! hip line at `I`. The front extends to positive x and the back to
//! negative x. Waist darts are sized from the dart table.

use super::Panel;
use crate::darts::{dart_allocation, DartSpec};
use crate::geometry::{direction, midpoint, perpendicular, point_on_ray, Point};
use crate::outline::{Extent, Outline, OutlineBuilder};
use sloperkit_core::{Measurement, MeasurementSet, Result};

/// Gap between neighbouring darts along the waist
const DART_SPACING: f64 = 1.25;
/// Length of the front darts below the waist
const FRONT_DART_LENGTH: f64 = 3.5;
/// Length of the back darts below the waist
const BACK_DART_LENGTH: f64 = 5.5;

point_set! {
    /// Anchor points of the skirt front
    pub struct SkirtFrontPoints {
        /// Centre hem (origin)
        s => "S",
        r => "R",
        b => "B",
        u => "U",
        uu2 => "UU2",
        u2 => "U2",
        u3 => "U3",
        u3u4 => "U3U4",
        u4 => "U4",
        v => "V",
        ef2 => "EF2",
        ef => "EF",
        if3 => "IF3",
        i2 => "I2",
        /// Hip line
        i => "I",
        /// Waist line
        t => "T",
    }
}

point_set! {
    /// Anchor points of the skirt back
    pub struct SkirtBackPoints {
        /// Centre hem (origin)
        s => "S",
        q => "Q",
        x => "X",
        y => "Y",
        g => "G",
        w => "W",
        d => "D",
        dd2 => "DD2",
        d2 => "D2",
        d3 => "D3",
        d3d4 => "D3D4",
        d4 => "D4",
        eb2 => "EB2",
        eb => "EB",
        ib3 => "IB3",
        i2 => "I2",
        /// Hip line
        i => "I",
        /// Waist line
        t => "T",
    }
}

/// Centre-line points shared by both panels
struct CentreLine {
    s: Point,
    t: Point,
    i: Point,
    i2: Point,
    /// Distance from the hip line to the top of the side seam
    side_rise: f64,
}

fn centre_line(m: &MeasurementSet) -> Result<CentreLine> {
    let knee_length = m.require(Measurement::KneeLength)?;
    let hip_depth_front = m.require(Measurement::HipDepthFront)?;
    let hip_depth_side = m.require(Measurement::HipDepthSide)?;

    let s = Point::ORIGIN;
    let t = Point::new(s.x, s.y + knee_length);
    let i = Point::new(t.x, t.y - hip_depth_front);
    let i2 = Point::new(i.x, i.y + (t.y - i.y) / 3.0);
    let side_rise = if hip_depth_side < hip_depth_front {
        hip_depth_side + 2.0 * (hip_depth_front - hip_depth_side)
    } else {
        hip_depth_side
    };

    Ok(CentreLine {
        s,
        t,
        i,
        i2,
        side_rise,
    })
}

fn darts(m: &MeasurementSet, panel: Panel) -> Result<DartSpec> {
    let hip = m.require(Measurement::Hip)?;
    let waist = m.require(Measurement::Waist)?;
    Ok(dart_allocation(hip - waist, panel))
}

/// Derive every anchor point of the front panel.
pub fn derive_front_points(m: &MeasurementSet) -> Result<SkirtFrontPoints> {
    let hip_arc_front = m.require(Measurement::HipArcFront)?;
    let waist_arc_front = m.require(Measurement::WaistArcFront)?;
    let bust_span = m.require(Measurement::BustSpan)?;
    let CentreLine {
        s,
        t,
        i,
        i2,
        side_rise,
    } = centre_line(m)?;
    let dart = darts(m, Panel::Front)?;

    let b = Point::new(t.x + hip_arc_front + 0.5, t.y);
    let r = Point::new(b.x, s.y);
    let v = Point::new(b.x - (waist_arc_front + dart.total_intake()), b.y);

    let u = b.offset(-bust_span, 0.0);
    let u2 = u.offset(-dart.intake, 0.0);
    let u3 = u2.offset(-DART_SPACING, 0.0);
    let u4 = if dart.count == 2 {
        u3.offset(-dart.intake, 0.0)
    } else {
        u3
    };

    let ef = point_on_ray(i, direction(i, v)?, side_rise);
    let uu2 = Point::new((u.x + u2.x) / 2.0, u.y - FRONT_DART_LENGTH);
    let u3u4 = Point::new((u3.x + u4.x) / 2.0, u.y - FRONT_DART_LENGTH);
    let ef2 = Point::new((ef.x + u4.x) / 2.0, u4.y);
    let if3 = Point::new(i2.x, (ef.y + i2.y) / 2.0);

    Ok(SkirtFrontPoints {
        s,
        r,
        b,
        u,
        uu2,
        u2,
        u3,
        u3u4,
        u4,
        v,
        ef2,
        ef,
        if3,
        i2,
        i,
        t,
    })
}

/// Derive every anchor point of the back panel.
pub fn derive_back_points(m: &MeasurementSet) -> Result<SkirtBackPoints> {
    let hip_arc_back = m.require(Measurement::HipArcBack)?;
    let waist_arc_back = m.require(Measurement::WaistArcBack)?;
    let hip_depth_back = m.require(Measurement::HipDepthBack)?;
    let bust_span = m.require(Measurement::BustSpan)?;
    let CentreLine {
        s,
        t,
        i,
        i2,
        side_rise,
    } = centre_line(m)?;
    let dart = darts(m, Panel::Back)?;

    let x = Point::new(t.x - hip_arc_back - 0.5, t.y);
    let y = Point::new(x.x, i.y);
    let q = Point::new(x.x, s.y);
    let g = Point::new(y.x, y.y + hip_depth_back);
    let w = Point::new(x.x + waist_arc_back + dart.total_intake(), x.y);

    let eb = point_on_ray(i, direction(i, w)?, side_rise);

    let waistline = direction(g, w)?;
    let d = point_on_ray(g, waistline, bust_span);
    let d2 = point_on_ray(d, waistline, dart.intake);
    let d3 = point_on_ray(d2, waistline, DART_SPACING);
    let d4 = if dart.count == 2 {
        point_on_ray(d3, waistline, dart.intake)
    } else {
        d3
    };

    let dart_axis = perpendicular(waistline);
    let dd2 = point_on_ray(midpoint(d, d2), dart_axis, BACK_DART_LENGTH);
    let d3d4 = point_on_ray(midpoint(d3, d4), dart_axis, BACK_DART_LENGTH);
    let eb2 = Point::new((eb.x + d4.x) / 2.0, d4.y);
    let ib3 = Point::new(i2.x, (eb.y + i2.y) / 2.0);

    Ok(SkirtBackPoints {
        s,
        q,
        x,
        y,
        g,
        w,
        d,
        dd2,
        d2,
        d3,
        d3d4,
        d4,
        eb2,
        eb,
        ib3,
        i2,
        i,
        t,
    })
}

/// Front outline: hem, centre front, waist with darts, hip curve to the side seam.
pub fn front_outline(p: &SkirtFrontPoints) -> Outline {
    OutlineBuilder::begin(p.s)
        .line_to(p.r)
        .line_to(p.b)
        .line_to(p.u)
        .line_to(p.uu2)
        .line_to(p.u2)
        .line_to(p.u3)
        .line_to(p.u3u4)
        .line_to(p.u4)
        .quadratic_to(p.ef2, p.ef)
        .quadratic_to(p.if3, p.i2)
        .line_to(p.i)
        .close(Extent::new(p.r.x, p.ef.y))
}

/// Back outline: hem, centre back, waist with darts, hip curve to the side seam.
pub fn back_outline(p: &SkirtBackPoints) -> Outline {
    OutlineBuilder::begin(p.s)
        .line_to(p.q)
        .line_to(p.g)
        .line_to(p.d)
        .line_to(p.dd2)
        .line_to(p.d2)
        .line_to(p.d3)
        .line_to(p.d3d4)
        .line_to(p.d4)
        .quadratic_to(p.eb2, p.eb)
        .quadratic_to(p.ib3, p.i2)
        .line_to(p.i)
        .close(Extent::new(-p.q.x, p.eb.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(hip: f64, waist: f64) -> MeasurementSet {
        MeasurementSet::from_pairs(&[
            (Measurement::KneeLength, 23.0),
            (Measurement::HipDepthFront, 8.5),
            (Measurement::HipDepthSide, 8.0),
            (Measurement::HipDepthBack, 8.25),
            (Measurement::Hip, hip),
            (Measurement::Waist, waist),
            (Measurement::HipArcFront, 9.5),
            (Measurement::HipArcBack, 9.75),
            (Measurement::WaistArcFront, 6.75),
            (Measurement::WaistArcBack, 6.5),
            (Measurement::BustSpan, 3.75),
        ])
    }

    #[test]
    fn test_front_two_darts() {
        let p = derive_front_points(&measurements(37.0, 28.0)).unwrap();
        assert_eq!(p.b, Point::new(10.0, 23.0));
        assert_eq!(p.u, Point::new(6.25, 23.0));
        assert_eq!(p.u2, Point::new(5.875, 23.0));
        assert_eq!(p.u3, Point::new(4.625, 23.0));
        assert_eq!(p.u4, Point::new(4.25, 23.0));
        assert_eq!(p.uu2.y, 23.0 - FRONT_DART_LENGTH);
        assert_eq!(p.v, Point::new(2.5, 23.0));
    }

    #[test]
    fn test_side_rise_doubles_front_excess() {
        let line = centre_line(&measurements(37.0, 28.0)).unwrap();
        assert_eq!(line.side_rise, 9.0);
        assert_eq!(line.i, Point::new(0.0, 14.5));
        assert!((line.i2.y - (14.5 + 8.5 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_darts_collapse_onto_dart_start() {
        let p = derive_front_points(&measurements(30.0, 28.0)).unwrap();
        assert_eq!(p.u2, p.u);
        assert_eq!(p.u4, p.u3);
    }

    #[test]
    fn test_back_darts_point_down() {
        let p = derive_back_points(&measurements(37.0, 28.0)).unwrap();
        assert!(p.dd2.y < p.d.y);
        assert!(p.d3d4.y < p.d3.y);
        assert_eq!(p.q, Point::new(-10.25, 0.0));
    }
}
