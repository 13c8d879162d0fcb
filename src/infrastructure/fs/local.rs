//! Local File Store Implementation
//!
//! Implements the FileStore port for local disk operations.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::domain::ports::{ChangeCallback, FileStore, FsError, FsResult, WatchSubscription};

use super::watch::watch_file;

/// Default quiet period before a change is reported
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Local file store
///
/// Provides atomic writes and `notify`-based watching.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileStore {
    debounce: Duration,
}

impl LocalFileStore {
    pub fn new() -> Self {
        Self::with_debounce(DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_debounce(debounce_ms: u64) -> Self {
        Self {
            debounce: Duration::from_millis(debounce_ms),
        }
    }
}

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for LocalFileStore {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from(e).with_path(path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes()).map_err(|e| e.with_path(path))
    }

    fn watch(
        &self,
        path: &Path,
        baseline: &str,
        on_change: ChangeCallback,
    ) -> FsResult<WatchSubscription> {
        watch_file(path, baseline, self.debounce, on_change)
    }
}

/// Write `content` to `path` via a temp file in the same directory and a
/// rename, so readers (and watchers) never see a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| FsError::from(e.error))?;
    Ok(())
}
