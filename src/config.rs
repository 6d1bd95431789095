//! Pipeline configuration.
//!
//! Handles loading, validating, and merging `edgekit.toml`. Stock defaults are
//! overridden by whatever the user file sets; everything else keeps its
//! default value.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! grayscale = true                          # Convert to luminance before edge detection
//! operators = ["roberts", "prewitt", "sobel"]  # Edge detectors to run, in order
//!
//! [smoothing]
//! enabled = true            # Gaussian blur before grayscale/edges
//! kernel_size = 5           # Taps in the 1-D kernel (odd, >= 1)
//! sigma = 20.0              # Standard deviation (> 0)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! operators = ["sobel"]
//!
//! [smoothing]
//! sigma = 1.4
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{FilterError, Operator, Smoothing};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILE_NAME: &str = "edgekit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pipeline configuration loaded from `edgekit.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Convert the (smoothed) image to grayscale before edge detection.
    pub grayscale: bool,
    /// Edge detectors to run, each producing its own output.
    pub operators: Vec<Operator>,
    /// Gaussian smoothing settings.
    pub smoothing: SmoothingConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            grayscale: true,
            operators: Operator::ALL.to_vec(),
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.smoothing.params()?;
        for (i, op) in self.operators.iter().enumerate() {
            if self.operators[..i].contains(op) {
                return Err(ConfigError::Validation(format!(
                    "operators lists '{op}' more than once"
                )));
            }
        }
        Ok(())
    }
}

/// Gaussian smoothing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothingConfig {
    pub enabled: bool,
    /// Kernel length in taps. Must be odd.
    pub kernel_size: usize,
    /// Standard deviation of the Gaussian.
    pub sigma: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        let stock = Smoothing::default();
        Self {
            enabled: true,
            kernel_size: stock.kernel_size(),
            sigma: stock.sigma(),
        }
    }
}

impl SmoothingConfig {
    /// Validated smoothing parameters.
    pub fn params(&self) -> Result<Smoothing, ConfigError> {
        self.params_with(None, None)
    }

    /// Validated smoothing parameters, with command-line values taking
    /// precedence over the configured ones.
    pub fn params_with(
        &self,
        kernel_size: Option<usize>,
        sigma: Option<f64>,
    ) -> Result<Smoothing, ConfigError> {
        let kernel_size = kernel_size.unwrap_or(self.kernel_size);
        let sigma = sigma.unwrap_or(self.sigma);
        Smoothing::new(kernel_size, sigma).map_err(|e| match e {
            FilterError::InvalidKernelSize(n) => ConfigError::Validation(format!(
                "smoothing.kernel_size must be odd and at least 1 (got {n})"
            )),
            FilterError::InvalidSigma(s) => ConfigError::Validation(format!(
                "smoothing.sigma must be a positive number (got {s})"
            )),
            other => ConfigError::Validation(other.to_string()),
        })
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PipelineConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `edgekit.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<PipelineConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PipelineConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `edgekit.toml` in the given directory.
///
/// A missing file yields the stock defaults.
pub fn load_config(dir: &Path) -> Result<PipelineConfig, ConfigError> {
    resolve_config(load_raw_config(dir)?)
}

/// Returns a fully-commented stock `edgekit.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# edgekit configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Convert the smoothed image to grayscale (luminance) before running the
# edge detectors. The grayscale image is also written as grayscale.bmp.
grayscale = true

# Edge detectors to run. Each writes <name>.bmp.
# Available: "roberts" (2x2), "prewitt" (3x3), "sobel" (3x3)
operators = ["roberts", "prewitt", "sobel"]

# ---------------------------------------------------------------------------
# Gaussian smoothing
# ---------------------------------------------------------------------------
# The blur runs three vertical passes followed by three horizontal passes of
# a 1-D kernel. The smoothed image is written as blur.bmp.
[smoothing]
enabled = true

# Number of taps in the kernel. Must be odd.
kernel_size = 5

# Standard deviation of the Gaussian. Must be greater than zero.
# Large values flatten the kernel toward a box blur.
sigma = 20.0
"##
}
