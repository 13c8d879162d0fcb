//! Shell Port
//!
//! Best-effort OS integration. Callers log failures and carry on; nothing
//! here may block or abort a document transition.

use std::path::{Path, PathBuf};

use super::FsError;
use crate::domain::value_objects::WindowId;

pub type ShellResult = Result<(), ShellError>;

/// OS integration errors
#[derive(Debug)]
pub enum ShellError {
    /// The platform has no such facility
    NotAvailable(String),
    /// The recent-documents list could not be updated
    Recent(FsError),
    /// The path has no containing folder to reveal
    NoParent(PathBuf),
    /// The platform opener failed
    Launch {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAvailable(msg) => write!(f, "Not available: {}", msg),
            Self::Recent(err) => write!(f, "Recent documents: {}", err),
            Self::NoParent(path) => write!(f, "{} has no parent folder", path.display()),
            Self::Launch { path, source } => {
                write!(f, "Could not open {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Recent(err) => Some(err),
            Self::Launch { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FsError> for ShellError {
    fn from(err: FsError) -> Self {
        Self::Recent(err)
    }
}

pub trait Shell {
    /// Add `path` to the OS recent-documents list
    fn add_recent_document(&mut self, path: &Path) -> ShellResult;

    /// Associate the window with the file it represents (proxy icon etc.)
    fn set_represented_file(&mut self, window: WindowId, path: Option<&Path>) -> ShellResult;

    /// Reveal `path` in the platform file manager
    fn show_in_folder(&mut self, path: &Path) -> ShellResult;

    /// Open `path` with the application registered for its type
    fn open_in_default_app(&mut self, path: &Path) -> ShellResult;
}

/// Shell that does nothing
pub struct NoopShell;

impl Shell for NoopShell {
    fn add_recent_document(&mut self, _path: &Path) -> ShellResult {
        Ok(())
    }

    fn set_represented_file(&mut self, _window: WindowId, _path: Option<&Path>) -> ShellResult {
        Ok(())
    }

    fn show_in_folder(&mut self, _path: &Path) -> ShellResult {
        Ok(())
    }

    fn open_in_default_app(&mut self, _path: &Path) -> ShellResult {
        Ok(())
    }
}
