//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menutree/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::DEFAULT_PAGE_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub app_name: Option<String>,
    pub display_title: Option<bool>,
    pub dual_column: Option<bool>,
    pub page_size: Option<usize>,
    pub loading_text: Option<String>,
    pub primary_color: Option<String>,
    pub ambiguous_wide: Option<bool>,
    pub hide_menu: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TickerConfig {
    pub interval_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_APP_NAME: &str = "menutree";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_PRIMARY_COLOR: &str = "cyan";
pub const DEFAULT_TICK_MILLIS: u64 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub app_name: String,
    pub display_title: bool,
    pub dual_column: bool,
    pub page_size: usize,
    pub loading_text: String,
    pub primary_color: String,
    pub ambiguous_wide: bool,
    pub hide_menu: bool,
    pub tick_interval: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&MenuConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub single_column: bool,
    pub page_size: Option<usize>,
    pub no_title: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menutree/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menutree").join("config.toml"))
}

/// Load config from `~/.menutree/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenuConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenuConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenuConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenuConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<MenuConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# menutree Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# app_name = "menutree"           # Or set MENUTREE_APP_NAME env var
# display_title = true
# dual_column = true              # Two items per row on wide terminals
# page_size = 10                  # Fixed for the whole session
# loading_text = "Loading..."
# primary_color = "cyan"          # Color name or "#rrggbb"; or MENUTREE_PRIMARY_COLOR
# ambiguous_wide = false          # Count East-Asian ambiguous chars as 2 cells
# hide_menu = false

# [ticker]
# interval_ms = 100               # Repaint and animation clock period
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MenuConfig, cli: &CliOverrides) -> ResolvedConfig {
    let general = &config.general;

    // App name: env → config → default
    let app_name = std::env::var("MENUTREE_APP_NAME")
        .ok()
        .or_else(|| general.app_name.clone())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

    // Primary color: env → config → default
    let primary_color = std::env::var("MENUTREE_PRIMARY_COLOR")
        .ok()
        .or_else(|| general.primary_color.clone())
        .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string());

    let dual_column = !cli.single_column && general.dual_column.unwrap_or(true);

    // Page size: CLI → config → default, never zero
    let mut page_size = cli
        .page_size
        .or(general.page_size)
        .filter(|&size| size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    // Two items share a row, so a page must hold whole rows
    if dual_column && page_size % 2 == 1 {
        warn!("Page size {} is odd, using {} for two columns", page_size, page_size + 1);
        page_size += 1;
    }

    let tick_millis = config
        .ticker
        .interval_ms
        .filter(|&ms| ms > 0)
        .unwrap_or(DEFAULT_TICK_MILLIS);

    ResolvedConfig {
        app_name,
        display_title: !cli.no_title && general.display_title.unwrap_or(true),
        dual_column,
        page_size,
        loading_text: general
            .loading_text
            .clone()
            .unwrap_or_else(|| DEFAULT_LOADING_TEXT.to_string()),
        primary_color,
        ambiguous_wide: general.ambiguous_wide.unwrap_or(false),
        hide_menu: general.hide_menu.unwrap_or(false),
        tick_interval: Duration::from_millis(tick_millis),
    }
}
