//! Command-line front end
//!
//! ```text
//! sloperkit <measurements.{json,toml}> [VIEW ...] [--all] [--out DIR]
//!           [--config FILE] [--points] [--json] [--version]
//! ```

use crate::render_options;
use anyhow::{bail, Context};
use sloperkit_core::{format_length, MeasurementSet};
use sloperkit_drafting::{render_svg, GarmentView, Pattern};
use sloperkit_settings::Config;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: sloperkit <measurements.{json,toml}> [VIEW ...] [--all] \
[--out DIR] [--config FILE] [--points] [--json] [--version]";

/// Parsed drafting request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub measurements: PathBuf,
    pub views: Vec<GarmentView>,
    pub all: bool,
    pub out: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Print the labelled point listing instead of rendering
    pub points: bool,
    /// Also write each pattern as JSON next to its SVG
    pub json: bool,
}

impl CliArgs {
    /// Views to draft, in catalogue order when `--all` is given
    pub fn requested_views(&self) -> Vec<GarmentView> {
        if self.all {
            GarmentView::ALL.to_vec()
        } else {
            self.views.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Draft(CliArgs),
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut measurements = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--all" => parsed.all = true,
            "--points" => parsed.points = true,
            "--json" => parsed.json = true,
            "--out" | "-o" => {
                let dir = args.next().context("--out needs a directory")?;
                parsed.out = Some(PathBuf::from(dir));
            }
            "--config" | "-c" => {
                let file = args.next().context("--config needs a file")?;
                parsed.config = Some(PathBuf::from(file));
            }
            flag if flag.starts_with('-') => bail!("Unknown option '{}'\n{}", flag, USAGE),
            _ if measurements.is_none() => measurements = Some(PathBuf::from(arg)),
            view => parsed.views.push(view.parse::<GarmentView>()?),
        }
    }

    parsed.measurements = measurements.with_context(|| format!("No measurement file\n{}", USAGE))?;
    if !parsed.all && parsed.views.is_empty() {
        bail!("No garment view requested; name one or pass --all\n{}", USAGE);
    }
    Ok(Command::Draft(parsed))
}

/// Point listing of a drafted pattern, one `label x y` row per point
pub fn format_points(pattern: &Pattern) -> String {
    let mut out = format!("# {}\n", pattern.view);
    for (label, point) in &pattern.points {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<14} {:>14} {:>14}",
            label,
            format_length(point.x, pattern.system),
            format_length(point.y, pattern.system)
        );
    }
    out
}

/// Draft every requested view and write the results.
///
/// Returns the files written, or nothing when only the point listing was
/// requested.
pub fn run(args: &CliArgs) -> anyhow::Result<Vec<PathBuf>> {
    let mut config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(out) = &args.out {
        config.output.directory = out.clone();
    }

    let measurements = MeasurementSet::load_from_file(&args.measurements)
        .with_context(|| format!("Failed to load {}", args.measurements.display()))?;
    tracing::info!(
        "Loaded {} measurements ({}) from {}",
        measurements.len(),
        measurements.system(),
        args.measurements.display()
    );

    let options = render_options(&config.render);
    let mut written = Vec::new();

    for view in args.requested_views() {
        let pattern = view
            .draft(&measurements)
            .with_context(|| format!("Failed to draft {}", view))?;

        if args.points {
            print!("{}", format_points(&pattern));
            continue;
        }

        let svg_path = config.output.path_for(view.route(), "svg");
        write_file(&svg_path, &render_svg(&pattern, &options))?;
        tracing::info!("Wrote {}", svg_path.display());
        written.push(svg_path);

        if args.json {
            let json_path = config.output.path_for(view.route(), "json");
            write_file(&json_path, &pattern.to_json()?)?;
            tracing::info!("Wrote {}", json_path.display());
            written.push(json_path);
        }
    }

    if !args.points {
        remember_measurement_file(&mut config, args);
    }
    Ok(written)
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Record the measurement file in the recent list of the config in use.
fn remember_measurement_file(config: &mut Config, args: &CliArgs) {
    let target = match &args.config {
        Some(path) => path.clone(),
        None => match Config::default_path() {
            Ok(path) if path.exists() => path,
            _ => return,
        },
    };

    let file = args
        .measurements
        .canonicalize()
        .unwrap_or_else(|_| args.measurements.clone());
    config.add_recent_file(file);
    if let Err(e) = config.save_to_file(&target) {
        tracing::warn!("Could not update recent files in {}: {}", target.display(), e);
    }
}
