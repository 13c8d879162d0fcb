//! Recent documents list
//!
//! Persisted as a JSON array of paths, most recent first.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FsError, FsResult};
use crate::infrastructure::fs::atomic_write;

/// Maximum number of remembered documents
pub const MAX_RECENT: usize = 10;

#[derive(Debug, Clone)]
pub struct RecentDocuments {
    file: PathBuf,
}

impl RecentDocuments {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    /// `<data_dir>/firesale/recent.json`
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("firesale").join("recent.json")))
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Stored entries; a missing file is an empty list
    pub fn load(&self) -> FsResult<Vec<PathBuf>> {
        match std::fs::read_to_string(&self.file) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                FsError::Other(format!("corrupt recent list {}: {}", self.file.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(FsError::from(e).with_path(&self.file)),
        }
    }

    /// Move `path` to the front, dropping duplicates and the overflow
    pub fn add(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        // A corrupt list is replaced rather than blocking new entries
        let mut entries = self.load().unwrap_or_default();
        entries.retain(|p| p != path);
        entries.insert(0, path.to_path_buf());
        entries.truncate(MAX_RECENT);

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| FsError::Other(e.to_string()))?;
        atomic_write(&self.file, json.as_bytes())?;
        Ok(entries)
    }
}
