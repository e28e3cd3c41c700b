//! Configuration file loading with precedence handling.

use crate::model::dataset::{DEFAULT_ITEM_COUNT, MAX_ITEM_COUNT};
use crate::state::Tab;
use crate::view_state::window::{clamp_overscan, DEFAULT_OVERSCAN};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "VSCROLL_CONFIG";

/// Environment variable overriding the generated record count.
pub const COUNT_ENV: &str = "VSCROLL_COUNT";

/// Environment variable overriding the overscan.
pub const OVERSCAN_ENV: &str = "VSCROLL_OVERSCAN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/vscroll/config.toml`.
///
/// ```toml
/// item_count = 50000
/// overscan = 8
/// initial_tab = "products"
///
/// [item_heights]
/// products = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of generated records per tab.
    #[serde(default)]
    pub item_count: Option<usize>,

    /// Extra rows materialized on each side of the viewport.
    /// Negative values are accepted and treated as 0.
    #[serde(default)]
    pub overscan: Option<i64>,

    /// Per-tab item heights in terminal rows.
    #[serde(default)]
    pub item_heights: Option<ItemHeightsSection>,

    /// Tab shown on startup.
    #[serde(default)]
    pub initial_tab: Option<Tab>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// `[item_heights]` section from TOML.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ItemHeightsSection {
    /// Basic list row height.
    #[serde(default)]
    pub basic: Option<u16>,
    /// User list row height.
    #[serde(default)]
    pub users: Option<u16>,
    /// Product list row height.
    #[serde(default)]
    pub products: Option<u16>,
    /// Record list row height.
    #[serde(default)]
    pub records: Option<u16>,
}

/// Item height of each tab, in terminal rows.
///
/// Zero is representable here on purpose: it is rejected by the windowing
/// engine when the lists are built, which fails startup with a clear error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHeights {
    /// Basic list row height.
    pub basic: u16,
    /// User list row height.
    pub users: u16,
    /// Product list row height.
    pub products: u16,
    /// Record list row height.
    pub records: u16,
}

impl ItemHeights {
    /// Height configured for `tab`.
    pub fn for_tab(&self, tab: Tab) -> u16 {
        match tab {
            Tab::Basic => self.basic,
            Tab::Users => self.users,
            Tab::Products => self.products,
            Tab::Records => self.records,
        }
    }
}

impl Default for ItemHeights {
    fn default() -> Self {
        Self {
            basic: 1,
            users: 2,
            products: 3,
            records: 1,
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Generated record count.
    pub item_count: usize,
    /// Overscan in items.
    pub overscan: usize,
    /// Per-tab item heights.
    pub item_heights: ItemHeights,
    /// Tab shown on startup.
    pub initial_tab: Tab,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            overscan: DEFAULT_OVERSCAN,
            item_heights: ItemHeights::default(),
            initial_tab: Tab::Basic,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vscroll/vscroll.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vscroll").join("vscroll.log")
    } else {
        PathBuf::from("vscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/vscroll/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/vscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// A negative overscan is clamped to 0 and an oversized count to the maximum.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let heights = config.item_heights.unwrap_or_default();
    let item_heights = ItemHeights {
        basic: heights.basic.unwrap_or(defaults.item_heights.basic),
        users: heights.users.unwrap_or(defaults.item_heights.users),
        products: heights.products.unwrap_or(defaults.item_heights.products),
        records: heights.records.unwrap_or(defaults.item_heights.records),
    };

    ResolvedConfig {
        item_count: config
            .item_count
            .map(limit_item_count)
            .unwrap_or(defaults.item_count),
        overscan: config
            .overscan
            .map(sanitize_overscan)
            .unwrap_or(defaults.overscan),
        item_heights,
        initial_tab: config.initial_tab.unwrap_or(defaults.initial_tab),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VSCROLL_COUNT`: Override record count
/// - `VSCROLL_OVERSCAN`: Override overscan (negative treated as 0)
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(count) = env_number::<usize>(COUNT_ENV) {
        config.item_count = limit_item_count(count);
    }

    if let Some(overscan) = env_number::<i64>(OVERSCAN_ENV) {
        config.overscan = sanitize_overscan(overscan);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    count_override: Option<usize>,
    overscan_override: Option<i64>,
    tab_override: Option<Tab>,
) -> ResolvedConfig {
    if let Some(count) = count_override {
        config.item_count = limit_item_count(count);
    }

    if let Some(overscan) = overscan_override {
        config.overscan = sanitize_overscan(overscan);
    }

    if let Some(tab) = tab_override {
        config.initial_tab = tab;
    }

    config
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

fn sanitize_overscan(overscan: i64) -> usize {
    if overscan < 0 {
        warn!(overscan, "Negative overscan treated as 0");
    }
    clamp_overscan(overscan)
}

fn limit_item_count(count: usize) -> usize {
    if count > MAX_ITEM_COUNT {
        warn!(count, max = MAX_ITEM_COUNT, "Record count capped");
    }
    count.min(MAX_ITEM_COUNT)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
