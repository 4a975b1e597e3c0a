//! Closed pattern outlines
//!
//! An [`Outline`] is the ordered boundary of a pattern piece: a start point
//! followed by line, quadratic and cubic segments, with the overall drafted
//! extent of the piece. Outlines are only produced through
//! [`OutlineBuilder::close`], so the last segment always ends on the start
//! point.

use crate::geometry::Point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

/// One piece of an outline, ending at `to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Line { to: Point },
    Quadratic { ctrl: Point, to: Point },
    Cubic { ctrl1: Point, ctrl2: Point, to: Point },
}

impl Segment {
    /// Where the segment ends
    pub fn end(&self) -> Point {
        match self {
            Segment::Line { to } | Segment::Quadratic { to, .. } | Segment::Cubic { to, .. } => *to,
        }
    }

    /// Control points followed by the end point
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Segment::Line { to } => vec![to],
            Segment::Quadratic { ctrl, to } => vec![ctrl, to],
            Segment::Cubic { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
        }
    }
}

/// Drafted width and height of a pattern piece
///
/// This is the nominal size used for the physical page size, which is not
/// necessarily the bounding box of every point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Closed boundary of a pattern piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    start: Point,
    segments: Vec<Segment>,
    extent: Extent,
}

impl Outline {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// End point of the final segment
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, Segment::end)
    }

    pub fn is_closed(&self) -> bool {
        self.end() == self.start
    }

    /// Every point of the outline, controls included
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().flat_map(Segment::points))
    }

    /// Axis-aligned bounds `(min, max)` over every point, controls included
    pub fn bounds(&self) -> (Point, Point) {
        self.all_points().fold((self.start, self.start), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        })
    }

    /// Convert to a `lyon` path (single closed sub-path)
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(self.start.to_lyon());
        for segment in &self.segments {
            match *segment {
                Segment::Line { to } => {
                    builder.line_to(to.to_lyon());
                }
                Segment::Quadratic { ctrl, to } => {
                    builder.quadratic_bezier_to(ctrl.to_lyon(), to.to_lyon());
                }
                Segment::Cubic { ctrl1, ctrl2, to } => {
                    builder.cubic_bezier_to(ctrl1.to_lyon(), ctrl2.to_lyon(), to.to_lyon());
                }
            }
        }
        builder.end(true);
        builder.build()
    }

    /// SVG path data (`M/L/Q/C/Z`) with `precision` decimals per coordinate
    ///
    /// Coordinates are formatted from the `f64` points, not the `lyon` path.
    pub fn to_svg_path_data(&self, precision: usize) -> String {
        let xy = |p: Point| format!("{:.*} {:.*}", precision, p.x, precision, p.y);
        let mut commands: Vec<String> = Vec::with_capacity(self.segments.len() + 2);

        commands.push(format!("M {}", xy(self.start)));
        for segment in &self.segments {
            commands.push(match *segment {
                Segment::Line { to } => format!("L {}", xy(to)),
                Segment::Quadratic { ctrl, to } => format!("Q {} {}", xy(ctrl), xy(to)),
                Segment::Cubic { ctrl1, ctrl2, to } => {
                    format!("C {} {} {}", xy(ctrl1), xy(ctrl2), xy(to))
                }
            });
        }
        commands.push("Z".to_string());
        commands.join(" ")
    }
}

/// Incremental outline construction
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    start: Point,
    current: Point,
    segments: Vec<Segment>,
}

impl OutlineBuilder {
    pub fn begin(start: Point) -> Self {
        Self {
            start,
            current: start,
            segments: Vec::new(),
        }
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.segments.push(Segment::Line { to });
        self.current = to;
        self
    }

    pub fn quadratic_to(mut self, ctrl: Point, to: Point) -> Self {
        self.segments.push(Segment::Quadratic { ctrl, to });
        self.current = to;
        self
    }

    pub fn cubic_to(mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        self.segments.push(Segment::Cubic { ctrl1, ctrl2, to });
        self.current = to;
        self
    }

    /// Finish the outline, adding a straight line back to the start if the
    /// last segment does not already end there.
    pub fn close(mut self, extent: Extent) -> Outline {
        if self.segments.is_empty() || self.current != self.start {
            self.segments.push(Segment::Line { to: self.start });
        }
        Outline {
            start: self.start,
            segments: self.segments,
            extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Outline {
        OutlineBuilder::begin(Point::new(0.0, 0.0))
            .line_to(Point::new(4.0, 0.0))
            .quadratic_to(Point::new(4.0, 3.0), Point::new(0.0, 3.0))
            .close(Extent::new(4.0, 3.0))
    }

    #[test]
    fn test_close_appends_return_line() {
        let outline = triangle();
        assert_eq!(outline.segments().len(), 3);
        assert_eq!(
            outline.segments()[2],
            Segment::Line {
                to: Point::new(0.0, 0.0)
            }
        );
        assert!(outline.is_closed());
    }

    #[test]
    fn test_close_does_not_duplicate_return() {
        let outline = OutlineBuilder::begin(Point::new(0.0, 0.0))
            .line_to(Point::new(1.0, 0.0))
            .line_to(Point::new(0.0, 0.0))
            .close(Extent::new(1.0, 0.0));
        assert_eq!(outline.segments().len(), 2);
        assert!(outline.is_closed());
    }

    #[test]
    fn test_bounds_include_controls() {
        let outline = OutlineBuilder::begin(Point::new(0.0, 0.0))
            .cubic_to(
                Point::new(-1.0, 2.0),
                Point::new(3.0, 5.0),
                Point::new(2.0, 0.0),
            )
            .close(Extent::new(2.0, 0.0));
        let (min, max) = outline.bounds();
        assert_eq!(min, Point::new(-1.0, 0.0));
        assert_eq!(max, Point::new(3.0, 5.0));
    }

    #[test]
    fn test_svg_path_data() {
        let data = triangle().to_svg_path_data(1);
        assert_eq!(data, "M 0.0 0.0 L 4.0 0.0 Q 4.0 3.0 0.0 3.0 L 0.0 0.0 Z");
    }

    #[test]
    fn test_svg_path_data_keeps_full_precision() {
        let outline = OutlineBuilder::begin(Point::new(0.1, 0.0))
            .line_to(Point::new(2.0 / 3.0, 7.3))
            .close(Extent::new(1.0, 7.3));
        let data = outline.to_svg_path_data(9);
        assert_eq!(
            data,
            "M 0.100000000 0.000000000 L 0.666666667 7.300000000 L 0.100000000 0.000000000 Z"
        );
    }

    #[test]
    fn test_lyon_path_event_count() {
        let path = triangle().to_lyon_path();
        // Begin + three segments + End
        assert_eq!(path.iter().count(), 5);
    }
}
