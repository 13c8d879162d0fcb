//! Configuration module for Fire Sale
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FIRESALE_*)
//! 3. User config (<config_dir>/firesale/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{AppConfig, Config, OutputConfig, SyncConfig, Verbosity, WatchConfig, WindowConfig};
