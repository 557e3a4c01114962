//! Export configuration module.
//!
//! Handles loading, validating, and merging `imageset.toml`. Stock defaults
//! are the base layer; a user file only needs the keys it changes.
//!
//! ## Config File Location
//!
//! `imageset.toml` in the working directory is picked up automatically.
//! `--config <FILE>` points at a specific file instead (which must exist).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [resample]
//! filter = "lanczos3"         # nearest | triangle | catmull-rom | gaussian | lanczos3
//!
//! [processing]
//! parallel_variants = false   # Render 1x/2x/3x concurrently
//! max_processes = 4           # Max parallel workers (omit for auto = CPU cores)
//!
//! [reveal]
//! command = "nautilus"        # File browser to open (omit for platform default)
//! ```
//!
//! The variant sizes (13, 25, 38) and the manifest schema are not
//! configurable. Unknown keys are rejected to catch typos early.

use crate::imaging::ResampleFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "imageset.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Export configuration loaded from `imageset.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Resampling settings.
    pub resample: ResampleConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
    /// File browser settings for `--reveal`.
    pub reveal: RevealConfig,
}

impl ExportConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        if self
            .reveal
            .command
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "reveal.command must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResampleConfig {
    /// Kernel used to scale the source down to each variant.
    pub filter: ResampleFilter,
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Render the three variants concurrently instead of one after another.
    pub parallel_variants: bool,
    /// Maximum number of parallel workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Program launched with the imageset folder as its only argument.
    pub command: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ExportConfig::default()).expect("default config must serialize")
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

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ExportConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ExportConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `imageset.toml` from `dir`, falling back to stock defaults when absent.
pub fn load_config(dir: &Path) -> Result<ExportConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILENAME, dir.display());
        return resolve_config(stock_defaults_value(), None);
    }
    load_config_file(&path)
}

/// Load an explicit config file. A missing file is an error.
pub fn load_config_file(path: &Path) -> Result<ExportConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    log::debug!("loaded config from {}", path.display());
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `imageset.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# imageset-gen Configuration
# ==========================
#
# Every key is optional. Values shown are the defaults.
# Place this file as imageset.toml in the directory you run from,
# or pass it explicitly with --config.
#
# Variant sizes (13x13 @1x, 25x25 @2x, 38x38 @3x) and the Contents.json
# schema are fixed and cannot be changed here.

# ---------------------------------------------------------------------------
# Resampling
# ---------------------------------------------------------------------------
[resample]
# Kernel used when scaling the source to each variant.
# One of: nearest, triangle, catmull-rom, gaussian, lanczos3
filter = "lanczos3"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Render the 1x, 2x and 3x variants concurrently. When any variant fails,
# all failures are reported together and Contents.json is not written.
parallel_variants = false

# Maximum parallel workers. Omit to use all CPU cores.
# Values above the core count are clamped down.
# max_processes = 4

# ---------------------------------------------------------------------------
# Reveal
# ---------------------------------------------------------------------------
[reveal]
# Program used by --reveal, called with the imageset folder as its argument.
# Omit to use the platform default (open -R, explorer /select, xdg-open).
# command = "nautilus"
"##
}
