//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Position, APP_TITLE};
use crate::error::FireSaleResult;

use super::loader::{self, ConfigWarning};

/// Application-wide behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Keep running with no open windows (menu-bar style). Defaults to the
    /// platform convention.
    #[serde(default = "default_resident")]
    pub resident: bool,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resident: default_resident(),
            title: default_title(),
        }
    }
}

fn default_resident() -> bool {
    cfg!(target_os = "macos")
}

fn default_title() -> String {
    APP_TITLE.to_string()
}

/// New-window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Offset in pixels of a new window from the focused one
    #[serde(default = "default_cascade_offset")]
    pub cascade_offset: i32,

    /// Fixed position for windows opened with nothing focused. Unset means
    /// toolkit placement.
    #[serde(default)]
    pub default_x: Option<i32>,

    #[serde(default)]
    pub default_y: Option<i32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            cascade_offset: default_cascade_offset(),
            default_x: None,
            default_y: None,
        }
    }
}

impl WindowConfig {
    /// Configured default position, if both coordinates are set
    pub fn default_position(&self) -> Option<Position> {
        match (self.default_x, self.default_y) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }
}

fn default_cascade_offset() -> i32 {
    10
}

/// File watching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Quiet period before a burst of file events is reported
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

/// Conflict reconciliation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Load external changes even when the user answers "Cancel"
    #[serde(default)]
    pub reload_on_decline: bool,
}

/// Output verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `log` level filter for this verbosity
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
        }
    }

    /// From a `-v` count
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Print notifications as NDJSON
    #[serde(default)]
    pub json: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FireSaleResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FireSaleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config, or defaults, with environment overrides applied
    pub fn load_or_default() -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (FIRESALE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
