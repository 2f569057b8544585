//! Configuration Module
//! Thresholds, input path and display settings, optionally read from `medviz.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cholesterol level (mg/dL) above which a patient is flagged.
pub const HIGH_CHOLESTEROL_THRESHOLD: f64 = 200.0;
/// Systolic blood pressure (mmHg) above which a patient is flagged.
pub const HYPERTENSION_THRESHOLD: f64 = 140.0;

pub const DEFAULT_DATA_PATH: &str = "medical_data.csv";
pub const DEFAULT_CONFIG_PATH: &str = "medviz.json";
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
pub const DEFAULT_KDE_GRID_POINTS: usize = 200;
/// 10 x 5 inches at 100 dpi
pub const DEFAULT_FIGURE_SIZE: [u32; 2] = [1000, 500];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("histogram_bins must be at least 1")]
    ZeroBins,
}

/// Cut-offs used by the enricher for the boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub cholesterol: f64,
    pub blood_pressure: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cholesterol: HIGH_CHOLESTEROL_THRESHOLD,
            blood_pressure: HYPERTENSION_THRESHOLD,
        }
    }
}

/// Runtime settings for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub data_path: PathBuf,
    pub thresholds: Thresholds,
    pub histogram_bins: usize,
    pub kde_grid_points: usize,
    pub figure_size: [u32; 2],
    /// Show each figure in a window
    pub interactive: bool,
    /// Also write every figure as PNG into this directory
    pub export_dir: Option<PathBuf>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            thresholds: Thresholds::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            kde_grid_points: DEFAULT_KDE_GRID_POINTS,
            figure_size: DEFAULT_FIGURE_SIZE,
            interactive: true,
            export_dir: None,
        }
    }
}

impl VizConfig {
    /// Parse a JSON config file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            tracing::info!(path = %path.display(), "Loading config");
            Self::from_json_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bins == 0 {
            return Err(ConfigError::ZeroBins);
        }
        Ok(())
    }
}
