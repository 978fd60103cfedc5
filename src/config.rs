//! Data directory configuration.
//!
//! Handles loading, validating, and merging an optional `config.toml` placed in
//! the data root. Stock defaults match the layout written by the conversion
//! pipeline, so most installations need no config file at all.
//!
//! ## Config File Location
//!
//! ```text
//! data/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── notebook-1/
//! │   └── ...
//! └── notebook-2/
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [layout]
//! notebook_prefix = "notebook-"   # Directory prefix marking a notebook
//! name_file = "notebook_name"     # Per-notebook display name file
//! thumbnails_dir = "thumbnails"   # Per-notebook thumbnail subdirectory
//!
//! [assets]
//! mount = "pendata"               # URL prefix under which the data dir is served
//!
//! [processing]
//! max_processes = 4               # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml` in the data root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Naming conventions of the data directory.
    pub layout: LayoutConfig,
    /// How asset references are rendered.
    pub assets: AssetsConfig,
    /// Parallel scanning settings.
    pub processing: ProcessingConfig,
}

impl LibraryConfig {
    /// Validate config values are usable as path components.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("layout.notebook_prefix", &self.layout.notebook_prefix),
            ("layout.name_file", &self.layout.name_file),
            ("layout.thumbnails_dir", &self.layout.thumbnails_dir),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if value.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "{key} must not contain path separators, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Naming conventions shared with the conversion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Prefix of notebook directory names; the remainder is the notebook id.
    pub notebook_prefix: String,
    /// File inside a notebook directory holding its display name.
    pub name_file: String,
    /// Subdirectory holding `<pdf-filename>.png` thumbnails.
    pub thumbnails_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            notebook_prefix: "notebook-".to_string(),
            name_file: "notebook_name".to_string(),
            thumbnails_dir: "thumbnails".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Directory name of the notebook with the given id.
    pub fn notebook_dirname(&self, id: &str) -> String {
        format!("{}{}", self.notebook_prefix, id)
    }
}

/// Asset reference settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Leading path segment of every asset reference. Empty means references
    /// are relative to the data root.
    pub mount: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            mount: "pendata".to_string(),
        }
    }
}

impl AssetsConfig {
    /// Reference to `file` inside notebook directory `dirname`.
    pub fn asset_url(&self, dirname: &str, file: &str) -> String {
        let mount = self.mount.trim_matches('/');
        if mount.is_empty() {
            format!("{dirname}/{file}")
        } else {
            format!("{mount}/{dirname}/{file}")
        }
    }
}

/// Parallel scanning settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel scan workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, at least one
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(LibraryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the data root, on top of stock defaults.
pub fn load_config(root: &Path) -> Result<LibraryConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: LibraryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# pendata configuration
# =====================
# Place this file in the data directory as config.toml.
# All settings are optional; values shown are the defaults.
# Unknown keys will cause an error.

[layout]
# Directories whose name starts with this prefix are notebooks.
# The rest of the name is the notebook id: notebook-42 -> "42".
notebook_prefix = "notebook-"
# File inside each notebook directory holding its display name.
name_file = "notebook_name"
# Subdirectory with pre-rendered thumbnails, named <pdf-filename>.png.
thumbnails_dir = "thumbnails"

[assets]
# Leading path segment of PDF and thumbnail references.
# Set to "" to make references relative to the data directory.
mount = "pendata"

[processing]
# Maximum parallel scan workers. Omit to use all CPU cores.
# max_processes = 4
"##
}
