//! Men's torso sloper, front and back
//!
//! The origin `E` is centre hip. The spine runs up the y axis through centre
//! waist, centre neck and the high-shoulder line; side points are eased
//! quarter circumferences. Front and back share everything except the
//! across-shoulder/across measurements and the neckline.

use super::Panel;
use crate::bezier::cubic_bezier_length;
use crate::corner::square_off_corner;
use crate::geometry::{right_triangle_leg, Point};
use crate::outline::{Extent, Outline, OutlineBuilder};
use crate::points::PointSet;
use sloperkit_core::{Measurement, MeasurementSet, Result};

/// Ease added to each quartered circumference
const SIDE_EASE: f64 = 1.25;
/// Allowance for the squared-off ends of the armhole seam
const ARMHOLE_ALLOWANCE: f64 = 0.5;

/// Anchor points of a men's torso panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MensTorsoPoints {
    pub panel: Panel,
    /// Centre front neck
    pub a: Point,
    /// Centre waist
    pub b: Point,
    /// Centre back neck
    pub c: Point,
    /// Side waist
    pub d: Point,
    /// Centre hip (origin)
    pub e: Point,
    /// Side hip
    pub f: Point,
    /// Low shoulder
    pub g: Point,
    pub g2: Point,
    pub g3: Point,
    /// High shoulder
    pub h: Point,
    /// Centre, level with the armpit
    pub i: Point,
    /// Side below armpit
    pub j: Point,
    pub j2: Point,
    pub j3: Point,
    pub k: Point,
    pub l: Point,
    pub l2: Point,
    /// Centre top of the high-shoulder line
    pub m: Point,
    /// Top low shoulder
    pub n: Point,
    /// Squared start of the neckline (A2 front, C2 back)
    pub neck_square: Point,
    /// Neckline control (A3 front, C3 back)
    pub neck_control: Point,
}

impl MensTorsoPoints {
    /// Centre neck point the neckline closes on
    pub fn centre_neck(&self) -> Point {
        match self.panel {
            Panel::Front => self.a,
            Panel::Back => self.c,
        }
    }
}

impl PointSet for MensTorsoPoints {
    fn labelled(&self) -> Vec<(&'static str, Point)> {
        let (square, control) = match self.panel {
            Panel::Front => ("A2", "A3"),
            Panel::Back => ("C2", "C3"),
        };
        vec![
            ("A", self.a),
            ("B", self.b),
            ("C", self.c),
            ("D", self.d),
            ("E", self.e),
            ("F", self.f),
            ("G", self.g),
            ("G2", self.g2),
            ("G3", self.g3),
            ("H", self.h),
            ("I", self.i),
            ("J", self.j),
            ("J2", self.j2),
            ("J3", self.j3),
            ("K", self.k),
            ("L", self.l),
            ("L2", self.l2),
            ("M", self.m),
            ("N", self.n),
            (square, self.neck_square),
            (control, self.neck_control),
        ]
    }
}

/// Derive every anchor point of the front or back torso panel.
pub fn derive_points(m: &MeasurementSet, panel: Panel) -> Result<MensTorsoPoints> {
    let (across_shoulder, shoulder_slope, across) = match panel {
        Panel::Front => (
            m.require(Measurement::AcrossShoulderFront)?,
            m.require(Measurement::ShoulderSlopeFront)?,
            m.require(Measurement::AcrossFront)?,
        ),
        Panel::Back => (
            m.require(Measurement::AcrossShoulderBack)?,
            m.require(Measurement::ShoulderSlopeBack)?,
            m.require(Measurement::AcrossBack)?,
        ),
    };
    let hip_depth_side = m.require(Measurement::HipDepthSide)?;
    let full_length_front = m.require(Measurement::FullLengthFront)?;
    let side_length = m.require(Measurement::SideLength)?;
    let shoulder_length = m.require(Measurement::ShoulderLength)?;
    let waist = m.require(Measurement::Waist)?;
    let hip = m.require(Measurement::Hip)?;
    let chest = m.require(Measurement::Chest)?;

    let centre_length_front = m.require(Measurement::CenterLengthFront)?;
    let centre_length_back = m.require(Measurement::CenterLengthBack)?;

    let e = Point::ORIGIN;
    let b = Point::new(e.x, e.y + hip_depth_side);
    let a = Point::new(e.x, b.y + centre_length_front);
    let c = Point::new(e.x, b.y + centre_length_back);
    let top = Point::new(e.x, b.y + full_length_front);
    let i = Point::new(e.x, b.y + side_length);
    let k = Point::new(e.x, (c.y + i.y) / 2.0);
    let d = Point::new(e.x + waist / 4.0 + SIDE_EASE, b.y);
    let f = Point::new(e.x + hip / 4.0 + SIDE_EASE, e.y);
    let j = Point::new(e.x + chest / 4.0 + SIDE_EASE, i.y);
    let j2 = j.offset(-0.25, 0.0);

    let n = Point::new(e.x + across_shoulder, top.y);
    let g = Point::new(n.x, b.y + right_triangle_leg(shoulder_slope, n.x)?);
    let h = Point::new(n.x - right_triangle_leg(shoulder_length, n.y - g.y)?, n.y);
    let corner = square_off_corner(n, g, h)?;

    let l = Point::new(e.x + across, k.y);
    let l2 = l.offset(-1.0, 0.0);
    let j3 = Point::new(l.x, j2.y);

    let centre_neck = match panel {
        Panel::Front => a,
        Panel::Back => c,
    };
    let neck_square = centre_neck.offset(0.25, 0.0);
    let neck_control = Point::new(h.x, centre_neck.y);

    Ok(MensTorsoPoints {
        panel,
        a,
        b,
        c,
        d,
        e,
        f,
        g,
        g2: corner.control_point,
        g3: corner.squared_point,
        h,
        i,
        j,
        j2,
        j3,
        k,
        l,
        l2,
        m: top,
        n,
        neck_square,
        neck_control,
    })
}

/// Seam length of the panel's armhole curve plus the squared-end allowance.
pub fn derive_armhole_length(m: &MeasurementSet, panel: Panel) -> Result<f64> {
    let p = derive_points(m, panel)?;
    let length = cubic_bezier_length(p.j2, p.j3, p.l2, p.g3) + ARMHOLE_ALLOWANCE;
    tracing::debug!("men's torso {} armhole length {:.4}", panel, length);
    Ok(length)
}

/// Assemble the panel outline: side seam, armhole, shoulder, neckline, centre.
pub fn outline(p: &MensTorsoPoints) -> Outline {
    let height = p.m.y;
    let width = p.d.x.max(p.g.x).max(p.f.x).max(p.j.x);

    OutlineBuilder::begin(p.e)
        .line_to(p.f)
        .line_to(p.j)
        .line_to(p.j2)
        .cubic_to(p.j3, p.l2, p.g3)
        .line_to(p.g)
        .line_to(p.h)
        .quadratic_to(p.neck_control, p.neck_square)
        .line_to(p.centre_neck())
        .close(Extent::new(width, height))
}
