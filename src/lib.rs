//! # SloperKit
//!
//! Drafts flat sewing-pattern slopers from body measurements:
//! - Men's torso (front and back) and sleeve
//! - Women's bodice (front and back), sleeve and skirt (front and back)
//! - Unisex pant front
//!
//! ## Architecture
//!
//! SloperKit is organized as a workspace with multiple crates:
//!
//! 1. **sloperkit-core** - Errors, units, the body-measurement model
//! 2. **sloperkit-drafting** - Geometry primitives, per-view derivations, outlines, SVG
//! 3. **sloperkit-settings** - Render and output configuration
//! 4. **sloperkit** - This crate: logging setup, CLI, re-exports

pub mod cli;

pub use sloperkit_core::{
    format_length, Error, GeometryError, Measurement, MeasurementError, MeasurementSet,
    MeasurementSystem, Result,
};
pub use sloperkit_drafting::{
    render_svg, views, GarmentView, Outline, Panel, Pattern, Point, PointSet, RenderOptions,
};
pub use sloperkit_settings::{Config, FileNameStyle, OutputSettings, RenderSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Renderer options for the given render settings
pub fn render_options(settings: &RenderSettings) -> RenderOptions {
    RenderOptions {
        stroke_width: settings.stroke_width,
        stroke_color: settings.stroke_color.clone(),
        margin: settings.margin,
        show_points: settings.show_points,
        precision: settings.precision,
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_follow_settings() {
        let settings = RenderSettings {
            stroke_width: 0.1,
            show_points: true,
            ..RenderSettings::default()
        };
        let options = render_options(&settings);
        assert_eq!(options.stroke_width, 0.1);
        assert!(options.show_points);
        assert_eq!(options.margin, 1.0);
    }

    #[test]
    fn test_default_settings_match_renderer_defaults() {
        assert_eq!(
            render_options(&RenderSettings::default()),
            RenderOptions::default()
        );
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }
}
