//! Error types for Fire Sale
//!
//! Uses `thiserror` for library errors. Every variant is scoped to the window
//! or operation that produced it; none of them is fatal to the host.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::WindowId;

/// Result type alias for Fire Sale operations
pub type FireSaleResult<T> = Result<T, FireSaleError>;

/// Main error type for Fire Sale operations
#[derive(Error, Debug)]
pub enum FireSaleError {
    /// Reading or writing a document failed
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A prompt or file dialog was declined
    #[error("cancelled by user")]
    UserCancelled,

    /// The watch mechanism could not observe a path
    #[error("cannot watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// An event addressed a window that is no longer live
    #[error("no such window: {0}")]
    UnknownWindow(WindowId),

    /// A window-scoped command arrived while no window has focus
    #[error("there is currently no active document")]
    NoFocusedWindow,

    /// The file is not a plain-text or markdown document
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(PathBuf),

    /// The window has no file on disk yet
    #[error("window {0} has no file on disk")]
    Untitled(WindowId),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl FireSaleError {
    /// Build an I/O error for `path`, filling in the path the port left empty.
    pub fn io(path: impl Into<PathBuf>, source: FsError) -> Self {
        let path = path.into();
        FireSaleError::Io {
            source: source.with_path(&path),
            path,
        }
    }

    /// Whether this is the normal "user said no" abort path.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FireSaleError::UserCancelled)
    }
}
