//! Women's sleeve sloper
//!
//! Drafted from the cap top `D` down to the wrist at the origin. The cap is
//! sized from the mean of the two bodice armhole seams, and the underarm
//! seams are shaped towards the elbow at `M2`.

use super::{womens_bodice, Panel};
use crate::geometry::{
    direction, distance, line_at_y, midpoint, normalize, perpendicular, point_on_ray,
    right_triangle_leg, Point,
};
use crate::outline::{Extent, Outline, OutlineBuilder};
use sloperkit_core::{Measurement, MeasurementSet, Result};

point_set! {
    /// Anchor points of the women's sleeve
    pub struct WomensSleevePoints {
        /// Wrist centre (origin)
        y => "Y",
        /// Cap top
        d => "D",
        /// Bicep line centre
        w => "W",
        m1 => "M1",
        m2 => "M2",
        one => "one",
        two => "two",
        /// Back underarm
        kb => "KB",
        /// Front underarm
        kf => "KF",
        q => "Q",
        r => "R",
        s => "S",
        t => "T",
        u => "U",
        v => "V",
        x => "X",
        z => "Z",
        q2 => "Q2",
        r2 => "R2",
        s2 => "S2",
        t2 => "T2",
        u2 => "U2",
        v2 => "V2",
        t2d => "T2D",
        mid_t2u2 => "midT2U2",
        u2v2 => "U2V2",
        mid_v2kf => "midV2KF",
        s2d => "S2D",
        mid_s2r2 => "midS2R2",
        r2q2 => "R2Q2",
        mid_q2kb => "midQ2KB",
        l => "L",
        c => "C",
        n => "N",
        o => "O",
        n2 => "N2",
        p => "P",
        b => "B",
        a => "A",
    }
}

/// Cap-seam length the sleeve must match, from both bodice armholes.
pub fn cap_seam_length(m: &MeasurementSet) -> Result<f64> {
    let front = womens_bodice::derive_armhole_length(m, Panel::Front)?;
    let back = womens_bodice::derive_armhole_length(m, Panel::Back)?;
    Ok((front + back) / 2.0 + 0.25)
}

/// Derive every anchor point of the sleeve.
pub fn derive_points(m: &MeasurementSet) -> Result<WomensSleevePoints> {
    let arm_length = m.require(Measurement::ArmLength)?;
    let cap_height = m.require(Measurement::CapHeight)?;
    let bicep = m.require(Measurement::Bicep)?;
    let armhole = cap_seam_length(m)?;

    let y = Point::ORIGIN;
    let d = Point::new(y.x, y.y + arm_length);
    let w = Point::new(d.x, d.y - cap_height);
    let m1 = Point::new(w.x, (y.y + w.y) / 2.0);
    let m2 = m1.offset(0.0, 0.75);
    let cap = d.y - w.y;

    let one = Point::new(-right_triangle_leg(armhole, cap)?, w.y);
    let two = Point::new(-bicep / 2.0, w.y);
    let kb = two.offset(-1.0, 0.0);
    let kf = kb.mirror_x();

    let cap_at = |fx: f64, fy: f64| Point::new((kb.x - w.x) * fx, w.y + cap * fy);
    let q = cap_at(0.75, 0.25);
    let r = cap_at(0.5, 0.5);
    let s = cap_at(0.25, 0.75);
    let t = s.mirror_x();
    let u = r.mirror_x();
    let v = q.mirror_x();
    let x = Point::new(kb.x + 2.0, y.y);
    let z = x.mirror_x();

    let back_normal = perpendicular(normalize(d - kb)?);
    let q2 = point_on_ray(q, back_normal, 0.375);
    let r2 = point_on_ray(r, back_normal, -0.25);
    let s2 = point_on_ray(s, back_normal, -0.625);

    let front_normal = perpendicular(normalize(d - kf)?);
    let t2 = point_on_ray(t, front_normal, 0.75);
    let u2 = point_on_ray(u, front_normal, 0.1875);
    let v2 = point_on_ray(v, front_normal, -0.5);

    let t2d = Point::new(t2.x, d.y);
    let mid_t2u2 = Point::new(
        (t2.x + u2.x) / 2.0 + (u2.x - t2.x) / 4.0,
        (t2.y + u2.y) / 2.0,
    );
    let u2v2 = Point::new((u2.x + v2.x) / 2.0, v2.y);
    let mid_v2kf = midpoint(v2, kf);
    let s2d = Point::new(s2.x, d.y);
    let mid_s2r2 = Point::new(
        (s2.x + r2.x) / 2.0 + (r2.x - s2.x) / 4.0,
        (s2.y + r2.y) / 2.0,
    );
    let r2q2 = Point::new((r2.x + q2.x) / 2.0, q2.y);
    let mid_q2kb = midpoint(q2, kb);

    // Elbow shaping
    let l = line_at_y(z, kf - z, m2.y)?;
    let c = Point::new(-l.x - 0.25, l.y);
    let n = c.offset(0.0, -1.0);
    let o = midpoint(c, m2);
    let n2 = point_on_ray(o, direction(o, n)?, o.x - c.x);
    let p = Point::new(x.x + 0.75, x.y);
    let b = point_on_ray(n, direction(n, p)?, distance(z, l));
    let a = point_on_ray(b, direction(z, b)?, x.x - z.x);

    Ok(WomensSleevePoints {
        y,
        d,
        w,
        m1,
        m2,
        one,
        two,
        kb,
        kf,
        q,
        r,
        s,
        t,
        u,
        v,
        x,
        z,
        q2,
        r2,
        s2,
        t2,
        u2,
        v2,
        t2d,
        mid_t2u2,
        u2v2,
        mid_v2kf,
        s2d,
        mid_s2r2,
        r2q2,
        mid_q2kb,
        l,
        c,
        n,
        o,
        n2,
        p,
        b,
        a,
    })
}

/// Assemble the sleeve outline: wrist, front seam, cap, back seam with elbow shaping.
pub fn outline(p: &WomensSleevePoints) -> Outline {
    OutlineBuilder::begin(p.b)
        .line_to(p.a)
        .quadratic_to(p.l, p.kf)
        .cubic_to(p.mid_v2kf, p.u2v2, p.u2)
        .cubic_to(p.mid_t2u2, p.t2d, p.d)
        .cubic_to(p.s2d, p.mid_s2r2, p.r2)
        .cubic_to(p.r2q2, p.mid_q2kb, p.kb)
        .line_to(p.c)
        .line_to(p.o)
        .line_to(p.n2)
        .close(Extent::new(p.kf.x - p.kb.x, p.d.y))
}
