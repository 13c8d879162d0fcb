//! System Shell
//!
//! OS integration for the terminal host: the recent list lives in the user
//! data directory, and "reveal" / "open" go through the platform opener.

use std::path::Path;

use crate::domain::ports::{Shell, ShellError, ShellResult};
use crate::domain::value_objects::WindowId;

use super::recent::RecentDocuments;

pub struct SystemShell {
    recent: Option<RecentDocuments>,
}

impl SystemShell {
    pub fn new() -> Self {
        Self {
            recent: RecentDocuments::default_location(),
        }
    }

    pub fn with_recent(recent: RecentDocuments) -> Self {
        Self {
            recent: Some(recent),
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for SystemShell {
    fn add_recent_document(&mut self, path: &Path) -> ShellResult {
        let recent = self.recent.as_ref().ok_or_else(|| {
            ShellError::NotAvailable("no data directory for the recent list".to_string())
        })?;
        recent.add(path)?;
        Ok(())
    }

    fn set_represented_file(&mut self, window: WindowId, path: Option<&Path>) -> ShellResult {
        // Terminals have no proxy icon; keep the association visible in logs
        match path {
            Some(path) => log::debug!("window {} represents {}", window, path.display()),
            None => log::debug!("window {} represents no file", window),
        }
        Ok(())
    }

    fn show_in_folder(&mut self, path: &Path) -> ShellResult {
        let folder = path
            .parent()
            .ok_or_else(|| ShellError::NoParent(path.to_path_buf()))?;
        launch(folder)
    }

    fn open_in_default_app(&mut self, path: &Path) -> ShellResult {
        launch(path)
    }
}

fn launch(path: &Path) -> ShellResult {
    open::that(path).map_err(|source| ShellError::Launch {
        path: path.to_path_buf(),
        source,
    })
}
