// src/sink.rs

//! Where encoded images end up.
//!
//! `TextSink` is the seam between the canvas and the filesystem. `FileSink`
//! is the disk-backed implementation driven by `OutputConfig`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::OutputConfig;

pub trait TextSink {
    /// Directory a file should go to: `dir` under the base directory when
    /// given, the default output directory otherwise.
    fn resolve_dir(&self, dir: Option<&Path>) -> PathBuf;

    /// File stem used when the caller does not name the output.
    fn default_name(&self) -> &str;

    fn ensure_directory_exists(&self, path: &Path) -> Result<()>;

    /// Writes `contents` to `path`, replacing any existing file, and returns
    /// the path written.
    fn write_text_file(&self, path: &Path, contents: &str) -> Result<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct FileSink {
    base_dir: PathBuf,
    default_dir: PathBuf,
    default_name: String,
}

impl FileSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(&OutputConfig {
            base_dir: base_dir.into(),
            ..OutputConfig::default()
        })
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        // `join` keeps an absolute default_dir as-is.
        let default_dir = config.base_dir.join(&config.default_dir);
        FileSink {
            base_dir: config.base_dir.clone(),
            default_dir,
            default_name: config.default_name.clone(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }
}

impl TextSink for FileSink {
    fn resolve_dir(&self, dir: Option<&Path>) -> PathBuf {
        match dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.default_dir.clone(),
        }
    }

    fn default_name(&self) -> &str {
        &self.default_name
    }

    fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!("FileSink: creating directory {}", path.display());
            fs::create_dir_all(path)
                .with_context(|| format!("create_dir_all({}) failed", path.display()))?;
        }
        Ok(())
    }

    fn write_text_file(&self, path: &Path, contents: &str) -> Result<PathBuf> {
        fs::write(path, contents)
            .with_context(|| format!("write({}) failed", path.display()))?;
        info!("FileSink: wrote {} bytes to {}", contents.len(), path.display());
        Ok(path.to_path_buf())
    }
}
