// src/config.rs

//! Runtime configuration.
//!
//! Settings are deserialized from a JSON file named by the
//! `CANVAS_CORE_CONFIG` environment variable. Every section carries
//! `#[serde(default)]`, so a file only needs the keys it overrides. With no
//! file (or an unreadable one) the defaults below are used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Point, Vector};

/// Environment variable holding the path of the JSON config file.
pub const CONFIG_ENV_VAR: &str = "CANVAS_CORE_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where encoded images are written.
    pub output: OutputConfig,
    /// Parameters of the projectile demo.
    pub projectile: ProjectileConfig,
}

impl Config {
    /// Loads from `CANVAS_CORE_CONFIG`, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            info!("{} not set, using default configuration", CONFIG_ENV_VAR);
            return Config::default();
        };
        match Config::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring configuration file: {:#}", e);
                Config::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Config::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

// --- Output Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that caller-supplied output directories are joined onto.
    pub base_dir: PathBuf,
    /// Output directory used when the caller does not pick one.
    /// Relative paths are taken relative to `base_dir`.
    pub default_dir: PathBuf,
    /// File stem used when the caller does not name the output.
    pub default_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            base_dir: PathBuf::from("."),
            default_dir: PathBuf::from("generated"),
            default_name: "test".to_string(),
        }
    }
}

// --- Projectile Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub width: usize,
    pub height: usize,
    pub start: Point,
    /// Launch direction; normalized before scaling by `speed`.
    pub direction: Vector,
    pub speed: f64,
    pub gravity: Vector,
    pub wind: Vector,
    pub color: Color,
    /// File stem of the rendered image.
    pub output_name: String,
    /// Upper bound on simulation steps, for launches that never land.
    pub max_ticks: usize,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        ProjectileConfig {
            width: 900,
            height: 550,
            start: Point::new(0.0, 1.0, 0.0),
            direction: Vector::new(1.0, 1.8, 0.0),
            speed: 11.25,
            gravity: Vector::new(0.0, -0.1, 0.0),
            wind: Vector::new(-0.01, 0.0, 0.0),
            color: Color::new(1.0, 0.0, 0.0),
            output_name: "projectile".to_string(),
            max_ticks: 10_000,
        }
    }
}
