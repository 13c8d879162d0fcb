//! Sync controller options

use crate::config::Config;
use crate::domain::value_objects::APP_TITLE;

/// Behaviour switches for [`SyncController`](super::SyncController)
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Application name used in window titles
    pub app_title: String,
    /// Watch bound files for external changes
    pub watch_enabled: bool,
    /// Load external changes even when the user declines
    pub reload_on_decline: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            app_title: APP_TITLE.to_string(),
            watch_enabled: true,
            reload_on_decline: false,
        }
    }
}

impl SyncOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_title: config.app.title.clone(),
            watch_enabled: config.watch.enabled,
            reload_on_decline: config.sync.reload_on_decline,
        }
    }

    pub fn with_reload_on_decline(mut self, reload: bool) -> Self {
        self.reload_on_decline = reload;
        self
    }

    pub fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }
}
