//! Document window entity
//!
//! Per-window record of the file association and edit state. The edited
//! flag is never set directly: every mutation recomputes it from the
//! current and last-saved content.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{document_title, Position, WindowId};

/// Derived synchronization state of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No file and no edits
    Unbound,
    /// Content matches what was last loaded or saved
    Clean,
    /// Local edits are pending (bound or untitled)
    Dirty,
}

impl SyncState {
    pub fn is_dirty(self) -> bool {
        matches!(self, SyncState::Dirty)
    }
}

/// A live document window
#[derive(Debug, Clone)]
pub struct DocumentWindow {
    id: WindowId,
    file_path: Option<PathBuf>,
    last_saved_content: String,
    current_content: String,
    is_edited: bool,
    position: Position,
    ready: bool,
}

impl DocumentWindow {
    /// A fresh, untitled, empty window
    pub fn new(id: WindowId, position: Position) -> Self {
        Self {
            id,
            file_path: None,
            last_saved_content: String::new(),
            current_content: String::new(),
            is_edited: false,
            position,
            ready: false,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn last_saved_content(&self) -> &str {
        &self.last_saved_content
    }

    pub fn current_content(&self) -> &str {
        &self.current_content
    }

    pub fn is_edited(&self) -> bool {
        self.is_edited
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub(crate) fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn state(&self) -> SyncState {
        if self.is_edited {
            SyncState::Dirty
        } else if self.file_path.is_some() {
            SyncState::Clean
        } else {
            SyncState::Unbound
        }
    }

    /// Title bar text for this window
    pub fn title(&self, app_title: &str) -> String {
        document_title(app_title, self.file_path(), self.is_edited)
    }

    /// Record content typed in the window. Returns the new edited flag.
    pub fn apply_edit(&mut self, content: impl Into<String>) -> bool {
        self.current_content = content.into();
        self.recompute();
        self.is_edited
    }

    /// Replace everything with freshly loaded (or saved) file content.
    pub fn bind(&mut self, path: PathBuf, content: impl Into<String>) {
        let content = content.into();
        self.file_path = Some(path);
        self.current_content.clone_from(&content);
        self.last_saved_content = content;
        self.recompute();
    }

    /// Reconcile content another process wrote to the bound file.
    ///
    /// With `reload` the window takes the disk content and becomes clean;
    /// without it the local text is kept and compared against the new disk
    /// content.
    pub fn accept_disk_content(&mut self, content: impl Into<String>, reload: bool) {
        self.last_saved_content = content.into();
        if reload {
            self.current_content.clone_from(&self.last_saved_content);
        }
        self.recompute();
    }

    /// Throw local edits away. Returns the restored content.
    pub fn revert(&mut self) -> &str {
        self.current_content.clone_from(&self.last_saved_content);
        self.recompute();
        &self.current_content
    }

    fn recompute(&mut self) {
        self.is_edited = self.current_content != self.last_saved_content;
    }
}
