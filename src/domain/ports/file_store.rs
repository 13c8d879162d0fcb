//! FileStore port - document I/O and change notification
//!
//! This trait lets the sync controller read, write and watch documents
//! without depending on a concrete implementation (local disk, in-memory).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result type for file store operations
pub type FsResult<T> = Result<T, FsError>;

/// File store operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Fill in the path for errors converted from a bare `io::Error`.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            FsError::NotFound(p) if p.as_os_str().is_empty() => FsError::NotFound(path.into()),
            FsError::PermissionDenied(p) if p.as_os_str().is_empty() => {
                FsError::PermissionDenied(path.into())
            }
            other => other,
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Callback receiving the new content of a watched file
pub type ChangeCallback = Box<dyn Fn(String) + Send + 'static>;

/// Shared "is this subscription still live" flag.
///
/// Implementations check it before every callback so nothing is delivered
/// once the subscription has been cancelled.
#[derive(Debug, Clone)]
pub struct WatchActivation(Arc<AtomicBool>);

impl WatchActivation {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// An active registration for change notifications on one path.
///
/// Cancelling stops further callbacks and releases the underlying watcher.
/// Only the first cancel has an effect; dropping cancels too.
pub struct WatchSubscription {
    path: PathBuf,
    active: Arc<AtomicBool>,
    guard: Option<Box<dyn Send>>,
}

impl WatchSubscription {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            active: Arc::new(AtomicBool::new(true)),
            guard: None,
        }
    }

    /// Keep `guard` alive until the subscription is cancelled
    pub fn with_guard<G: Send + 'static>(mut self, guard: G) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    pub fn activation(&self) -> WatchActivation {
        WatchActivation(Arc::clone(&self.active))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop notifications. Returns `false` if already cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active.swap(false, Ordering::SeqCst);
        self.guard = None;
        was_active
    }
}

impl Drop for WatchSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for WatchSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSubscription")
            .field("path", &self.path)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Abstract document store
///
/// Implementations:
/// - `LocalFileStore` - disk I/O with `notify`-based watching
/// - in-memory fakes in the integration tests
pub trait FileStore {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Start delivering the file's new content to `on_change` whenever it
    /// changes on disk.
    ///
    /// `baseline` is the content the caller already holds. Disk content that
    /// differs from it when the watch starts counts as a change.
    fn watch(
        &self,
        path: &Path,
        baseline: &str,
        on_change: ChangeCallback,
    ) -> FsResult<WatchSubscription>;
}
