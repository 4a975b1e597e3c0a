//! SVG renderer for drafted patterns
//! Turns a [`Pattern`] into a standalone SVG document
//! Features:
//! - Physical page size in the measurement set's unit, plus a fixed border
//! - Y-up drafting plane flipped into SVG's y-down space
//! - Optional labelled construction-point markers

use crate::garment::Pattern;

/// Rendering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Outline stroke width in drafting units
    pub stroke_width: f64,
    pub stroke_color: String,
    /// Border around the drafted extent on every side
    pub margin: f64,
    /// Overlay labelled anchor points
    pub show_points: bool,
    /// Decimal places for emitted coordinates
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stroke_width: 0.03,
            stroke_color: "#000000".to_string(),
            margin: 1.0,
            show_points: false,
            precision: 3,
        }
    }
}

/// Render a pattern as an SVG document
pub fn render_svg(pattern: &Pattern, options: &RenderOptions) -> String {
    let prec = options.precision;
    let extent = pattern.outline.extent();
    let (min, _) = pattern.outline.bounds();
    let unit = pattern.system.unit_suffix();
    let margin = options.margin;

    let width = extent.width + 2.0 * margin;
    let height = extent.height + 2.0 * margin;
    let view_x = min.x - margin;
    // The flip maps drafting y to -y, so the top edge is -(min.y + height).
    let view_y = -(min.y + extent.height) - margin;

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.p$}{u}\" height=\"{h:.p$}{u}\" viewBox=\"{x:.p$} {y:.p$} {w:.p$} {h:.p$}\">\n",
        w = width,
        h = height,
        x = view_x,
        y = view_y,
        u = unit,
        p = prec
    ));
    svg.push_str(&format!("  <title>{}</title>\n", pattern.view.file_stem()));
    svg.push_str("  <g transform=\"scale(1,-1)\">\n");
    svg.push_str(&format!(
        "    <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.p$}\"/>\n",
        pattern.outline.to_svg_path_data(prec),
        escape_attribute(&options.stroke_color),
        options.stroke_width,
        p = prec
    ));
    svg.push_str("  </g>\n");

    if options.show_points {
        svg.push_str(&render_points(pattern, options));
    }

    svg.push_str("</svg>\n");

    tracing::debug!(
        "rendered {} as {:.3}{} x {:.3}{}",
        pattern.view,
        width,
        unit,
        height,
        unit
    );
    svg
}

/// Escape a value for use inside a double-quoted XML attribute
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Point markers, drawn outside the flipped group so labels read upright
fn render_points(pattern: &Pattern, options: &RenderOptions) -> String {
    let prec = options.precision;
    let radius = options.stroke_width * 2.0;
    let font_size = options.margin * 0.25;

    let mut out = String::from("  <g class=\"points\" fill=\"#d03030\">\n");
    for (label, point) in &pattern.points {
        let x = point.x;
        let y = -point.y;
        out.push_str(&format!(
            "    <circle cx=\"{x:.p$}\" cy=\"{y:.p$}\" r=\"{r:.p$}\"/>\n",
            x = x,
            y = y,
            r = radius,
            p = prec
        ));
        out.push_str(&format!(
            "    <text x=\"{x:.p$}\" y=\"{y:.p$}\" font-size=\"{f:.p$}\">{label}</text>\n",
            x = x + radius,
            y = y - radius,
            f = font_size,
            label = label,
            p = prec
        ));
    }
    out.push_str("  </g>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::GarmentView;
    use crate::geometry::Point;
    use crate::outline::{Extent, OutlineBuilder};
    use sloperkit_core::MeasurementSystem;

    fn square_pattern() -> Pattern {
        let outline = OutlineBuilder::begin(Point::new(0.0, -2.0))
            .line_to(Point::new(4.0, -2.0))
            .line_to(Point::new(4.0, 1.0))
            .line_to(Point::new(0.0, 1.0))
            .close(Extent::new(4.0, 3.0));
        Pattern {
            view: GarmentView::WomensSkirtBack,
            system: MeasurementSystem::Metric,
            points: vec![("S", Point::new(0.0, -2.0))],
            outline,
        }
    }

    #[test]
    fn test_physical_size_includes_margin() {
        let svg = render_svg(&square_pattern(), &RenderOptions::default());
        assert!(svg.contains("width=\"6.000cm\""));
        assert!(svg.contains("height=\"5.000cm\""));
        assert!(svg.contains("viewBox=\"-1.000 -2.000 6.000 5.000\""));
        assert!(svg.contains("<title>womens_sloper_skirt_back</title>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_points_only_when_requested() {
        let plain = render_svg(&square_pattern(), &RenderOptions::default());
        assert!(!plain.contains("<circle"));

        let options = RenderOptions {
            show_points: true,
            ..RenderOptions::default()
        };
        let marked = render_svg(&square_pattern(), &options);
        assert!(marked.contains("<circle cx=\"0.000\" cy=\"2.000\""));
        assert!(marked.contains(">S</text>"));
    }

    #[test]
    fn test_stroke_color_is_escaped() {
        let options = RenderOptions {
            stroke_color: "red\" onload=\"x()\" a=\"<&>".to_string(),
            ..RenderOptions::default()
        };
        let svg = render_svg(&square_pattern(), &options);
        assert!(svg.contains("stroke=\"red&quot; onload=&quot;x()&quot; a=&quot;&lt;&amp;&gt;\""));
        assert!(!svg.contains("onload=\"x()\""));
    }

    #[test]
    fn test_plain_color_is_unchanged() {
        assert_eq!(escape_attribute("#1a2b3c"), "#1a2b3c");
    }
}
