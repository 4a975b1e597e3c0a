//! # SloperKit Drafting
//!
//! Pattern-point derivation and curve assembly for flat sewing-pattern
//! slopers.
//!
//! A measurement set goes in; for each garment view the engine derives a set
//! of named anchor points with closed-form constructions, then joins them into
//! a closed outline of lines and quadratic/cubic Bezier segments.
//!
//! ## Modules
//!
//! - [`geometry`] - Points and the numeric primitives every construction uses
//! - [`bezier`] - Cubic Bezier arc length
//! - [`corner`] - Shoulder-corner squaring
//! - [`darts`] - Dart allocation table
//! - [`views`] - Per-view derivations and outlines
//! - [`garment`] - View catalogue and dispatch
//! - [`svg_renderer`] - SVG output

pub mod bezier;
pub mod corner;
pub mod darts;
pub mod geometry;
pub mod outline;
#[macro_use]
pub mod points;
pub mod garment;
pub mod svg_renderer;
pub mod views;

pub use bezier::{cubic_bezier_length, CubicBezier};
pub use corner::{square_off_corner, SquaredCorner, CORNER_RADIUS};
pub use darts::{dart_allocation, DartSpec};
pub use garment::{GarmentView, Pattern};
pub use geometry::{
    distance, midpoint, normalize, perpendicular, point_on_ray, right_triangle_leg,
    rotate_about_pivot, Point,
};
pub use outline::{Extent, Outline, OutlineBuilder, Segment};
pub use points::PointSet;
pub use svg_renderer::{render_svg, RenderOptions};
pub use views::Panel;
