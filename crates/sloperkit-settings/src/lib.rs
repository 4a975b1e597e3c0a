//! SloperKit Settings Crate
//!
//! Render and output configuration, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, FileNameStyle, OutputSettings, RenderSettings, MAX_PRECISION};
pub use error::{SettingsError, SettingsResult};
