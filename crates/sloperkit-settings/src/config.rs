//! Configuration for SloperKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Render settings (stroke, border margin, point overlay, precision)
//! - Output settings (directory, file naming, recent-file limit)
//! - Recently used measurement files

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Highest number of decimals written for a coordinate
pub const MAX_PRECISION: usize = 10;

/// SVG render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Outline stroke width, in the measurement set's unit
    pub stroke_width: f64,
    pub stroke_color: String,
    /// Border drawn around the pattern extent on every side
    pub margin: f64,
    /// Overlay labelled construction points
    pub show_points: bool,
    /// Decimal places for coordinates
    pub precision: usize,
}

impl Default for RenderSettings {
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

/// How drafted files are named inside the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNameStyle {
    /// `mens_sloper_torso_front.svg`
    #[default]
    Flat,
    /// `mens/sloper/torso/front.svg`
    Nested,
}

impl FileNameStyle {
    /// Relative output path for a slash-separated view route
    pub fn relative_path(&self, route: &str, extension: &str) -> PathBuf {
        match self {
            Self::Flat => PathBuf::from(format!("{}.{}", route.replace('/', "_"), extension)),
            Self::Nested => {
                let mut path: PathBuf = route.split('/').collect();
                path.set_extension(extension);
                path
            }
        }
    }
}

impl fmt::Display for FileNameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory drafted files are written to
    pub directory: PathBuf,
    pub file_name_style: FileNameStyle,
    /// Length of the recent measurement file list
    pub recent_files_count: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name_style: FileNameStyle::Flat,
            recent_files_count: 10,
        }
    }
}

impl OutputSettings {
    /// Full output path for a view route
    pub fn path_for(&self, route: &str, extension: &str) -> PathBuf {
        self.directory
            .join(self.file_name_style.relative_path(route, extension))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Most recently drafted measurement files, newest first
    pub recent_measurement_files: Vec<PathBuf>,
    pub render: RenderSettings,
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sloperkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let mut config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        config.trim_recent_files();
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, else the default path if it exists, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let render = &self.render;
        if !(render.stroke_width.is_finite() && render.stroke_width > 0.0) {
            return Err(SettingsError::invalid("render.stroke_width", "must be > 0"));
        }

        if !(render.margin.is_finite() && render.margin >= 0.0) {
            return Err(SettingsError::invalid("render.margin", "must be >= 0"));
        }

        if render.precision > MAX_PRECISION {
            return Err(SettingsError::invalid(
                "render.precision",
                format!("must be at most {}", MAX_PRECISION),
            ));
        }

        if render.stroke_color.trim().is_empty() {
            return Err(SettingsError::invalid("render.stroke_color", "must not be empty"));
        }

        if self.output.recent_files_count == 0 {
            return Err(SettingsError::invalid(
                "output.recent_files_count",
                "must be > 0",
            ));
        }

        Ok(())
    }

    /// Add file to the recent measurement files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_measurement_files.retain(|f| f != &path);
        self.recent_measurement_files.insert(0, path);
        self.recent_measurement_files
            .truncate(self.output.recent_files_count);
    }

    fn trim_recent_files(&mut self) {
        let limit = self.output.recent_files_count;
        if self.recent_measurement_files.len() > limit {
            tracing::warn!(
                "Dropping {} recent files beyond the limit of {}",
                self.recent_measurement_files.len() - limit,
                limit
            );
            self.recent_measurement_files.truncate(limit);
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
