//! Men's sleeve sloper
//!
//! The sleeve hangs from the cap top `P` down to the wrist line at the
//! origin. Its cap is sized so that each half matches the armhole seam of
//! the corresponding torso panel.

use super::{mens_torso, Panel};
use crate::geometry::{midpoint, normalize, perpendicular, point_on_ray, right_triangle_leg, Point};
use crate::outline::{Extent, Outline, OutlineBuilder};
use sloperkit_core::{Measurement, MeasurementSet, Result};

/// Ease around the wrist on each half of the sleeve
const WRIST_EASE: f64 = 1.0;

point_set! {
    /// Anchor points of the men's sleeve
    pub struct MensSleevePoints {
        /// Wrist centre (origin)
        n => "N",
        /// Cap top
        p => "P",
        /// Bicep line centre
        m => "M",
        /// Elbow
        o => "O",
        /// Back underarm
        r => "R",
        one => "one",
        four => "four",
        six => "six",
        one2 => "one2",
        four2 => "four2",
        six2 => "six2",
        /// Front underarm
        s => "S",
        nine => "nine",
        ten => "ten",
        eleven => "eleven",
        nine2 => "nine2",
        ten2 => "ten2",
        eleven2 => "eleven2",
        six2_p => "six2P",
        mid_six2_four2 => "midsix2four2",
        four2_one2 => "four2one2",
        mid_one2_r => "midone2R",
        nine2_p => "nine2P",
        mid_nine2_ten2 => "midnine2ten2",
        ten2_eleven2 => "ten2eleven2",
        mid_eleven2_s => "mideleven2S",
        /// Front wrist
        t => "T",
        /// Back wrist
        u => "U",
    }
}

/// Derive every anchor point of the sleeve.
pub fn derive_points(m: &MeasurementSet) -> Result<MensSleevePoints> {
    let arm_length = m.require(Measurement::ArmLength)?;
    let bicep = m.require(Measurement::Bicep)?;
    let elbow_length = m.require(Measurement::ElbowLength)?;
    let wrist = m.require(Measurement::Wrist)?;

    let back_armhole = mens_torso::derive_armhole_length(m, Panel::Back)? - 0.5;
    let front_armhole = mens_torso::derive_armhole_length(m, Panel::Front)? - 0.25;

    let n = Point::ORIGIN;
    let p = Point::new(n.x, n.y + arm_length);
    let centre = Point::new(p.x, p.y - bicep / 3.0);
    let o = Point::new(n.x, p.y - elbow_length);
    let cap = p.y - centre.y;

    // Back half of the cap
    let r = Point::new(centre.x - right_triangle_leg(back_armhole, cap)?, centre.y);
    let back_at = |fx: f64, fy: f64| Point::new((r.x - centre.x) * fx, centre.y + cap * fy);
    let one = back_at(0.875, 0.125);
    let four = back_at(0.5, 0.5);
    let six = back_at(0.25, 0.75);
    let back_normal = perpendicular(normalize(p - r)?);
    let one2 = point_on_ray(one, back_normal, 0.25);
    let four2 = point_on_ray(four, back_normal, -0.375);
    let six2 = point_on_ray(six, back_normal, -0.75);

    // Front half of the cap
    let s = Point::new(centre.x + right_triangle_leg(front_armhole, cap)?, centre.y);
    let front_at = |fx: f64, fy: f64| Point::new((s.x - centre.x) * fx, centre.y + cap * fy);
    let nine = front_at(0.25, 0.75);
    let ten = front_at(0.5, 0.5);
    let eleven = front_at(0.75, 0.25);
    let front_normal = perpendicular(normalize(p - s)?);
    let nine2 = point_on_ray(nine, front_normal, 0.625);
    let ten2 = point_on_ray(ten, front_normal, 0.125);
    let eleven2 = point_on_ray(eleven, front_normal, -0.5);

    let six2_p = Point::new(six2.x, p.y);
    let mid_six2_four2 = Point::new(
        (six2.x + four2.x) / 2.0 + (four2.x - six2.x) / 4.0,
        (six2.y + four2.y) / 2.0,
    );
    let four2_one2 = Point::new((four2.x + one2.x) / 2.0, one2.y);
    let mid_one2_r = midpoint(one2, r);

    let nine2_p = Point::new(nine2.x, p.y);
    let mid_nine2_ten2 = Point::new(
        (nine2.x + ten2.x) / 2.0 + (ten2.x - nine2.x) / 4.0,
        (nine2.y + ten2.y) / 2.0,
    );
    let ten2_eleven2 = Point::new((ten2.x + eleven2.x) / 2.0, eleven2.y);
    let mid_eleven2_s = midpoint(eleven2, s);

    let t = Point::new(wrist / 2.0 + WRIST_EASE, n.y);
    let u = Point::new(-t.x, t.y);

    Ok(MensSleevePoints {
        n,
        p,
        m: centre,
        o,
        r,
        one,
        four,
        six,
        one2,
        four2,
        six2,
        s,
        nine,
        ten,
        eleven,
        nine2,
        ten2,
        eleven2,
        six2_p,
        mid_six2_four2,
        four2_one2,
        mid_one2_r,
        nine2_p,
        mid_nine2_ten2,
        ten2_eleven2,
        mid_eleven2_s,
        t,
        u,
    })
}

/// Assemble the sleeve outline: front underarm seam, cap, back underarm seam, wrist.
pub fn outline(p: &MensSleevePoints) -> Outline {
    OutlineBuilder::begin(p.t)
        .line_to(p.s)
        .cubic_to(p.mid_eleven2_s, p.ten2_eleven2, p.ten2)
        .cubic_to(p.mid_nine2_ten2, p.nine2_p, p.p)
        .cubic_to(p.six2_p, p.mid_six2_four2, p.four2)
        .cubic_to(p.four2_one2, p.mid_one2_r, p.r)
        .line_to(p.u)
        .close(Extent::new(p.s.x - p.r.x, p.p.y))
}
