//! Prompter Port
//!
//! Modal dialogs the sync controller needs: yes/cancel questions, open and
//! save file pickers, and blocking error messages. Implementations can be
//! interactive (native or terminal dialogs) or automatic (a fixed policy).

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{FileKind, WindowId};

/// A yes/cancel question asked on behalf of a window
#[derive(Debug, Clone)]
pub enum Question<'a> {
    /// Opening another file would discard local edits
    OverwriteUnsaved {
        /// File about to be opened
        incoming: &'a Path,
    },
    /// Another process changed the bound file
    ExternalChange {
        path: &'a Path,
        /// Text currently in the window
        local: &'a str,
        /// Text now on disk
        incoming: &'a str,
    },
    /// The window is closing with local edits
    CloseUnsaved { title: &'a str },
}

impl Question<'_> {
    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self {
            Question::OverwriteUnsaved { .. } | Question::ExternalChange { .. } => {
                "Overwrite Current Unsaved Changes?"
            }
            Question::CloseUnsaved { .. } => "Quit with Unsaved Changes?",
        }
    }

    /// Dialog body
    pub fn message(&self) -> String {
        match self {
            Question::OverwriteUnsaved { .. } => "Opening a new file in this window will \
                overwrite your unsaved changes. Open this file anyway?"
                .to_string(),
            Question::ExternalChange { .. } => {
                "Another application has changed this file. Load changes?".to_string()
            }
            Question::CloseUnsaved { title } => {
                format!("\"{}\" has unsaved changes. Quit anyway?", title)
            }
        }
    }

    /// Labels for the affirmative and the cancel button
    pub fn buttons(&self) -> (&'static str, &'static str) {
        match self {
            Question::CloseUnsaved { .. } => ("Quit Anyway", "Cancel"),
            _ => ("Yes", "Cancel"),
        }
    }
}

/// Modal dialogs
pub trait Prompter {
    /// Ask `question`; `true` means the affirmative button.
    fn confirm(&self, window: WindowId, question: &Question<'_>) -> bool;

    /// Let the user pick a file to open. `None` on cancel.
    fn choose_open_path(&self, window: Option<WindowId>, filters: &[FileKind]) -> Option<PathBuf>;

    /// Let the user pick a destination. `None` on cancel.
    fn choose_save_path(
        &self,
        window: WindowId,
        kind: FileKind,
        suggested: Option<&Path>,
    ) -> Option<PathBuf>;

    /// Show a blocking error message.
    fn show_error(&self, window: Option<WindowId>, title: &str, message: &str);
}

impl<T: Prompter + ?Sized> Prompter for Box<T> {
    fn confirm(&self, window: WindowId, question: &Question<'_>) -> bool {
        (**self).confirm(window, question)
    }

    fn choose_open_path(&self, window: Option<WindowId>, filters: &[FileKind]) -> Option<PathBuf> {
        (**self).choose_open_path(window, filters)
    }

    fn choose_save_path(
        &self,
        window: WindowId,
        kind: FileKind,
        suggested: Option<&Path>,
    ) -> Option<PathBuf> {
        (**self).choose_save_path(window, kind, suggested)
    }

    fn show_error(&self, window: Option<WindowId>, title: &str, message: &str) {
        (**self).show_error(window, title, message)
    }
}

/// Prompter that confirms every question and cancels every file picker.
///
/// Use this when `--yes` is passed.
pub struct ForcePrompter;

impl Prompter for ForcePrompter {
    fn confirm(&self, _window: WindowId, _question: &Question<'_>) -> bool {
        true
    }

    fn choose_open_path(&self, _window: Option<WindowId>, _filters: &[FileKind]) -> Option<PathBuf> {
        None
    }

    fn choose_save_path(
        &self,
        _window: WindowId,
        _kind: FileKind,
        _suggested: Option<&Path>,
    ) -> Option<PathBuf> {
        None
    }

    fn show_error(&self, window: Option<WindowId>, title: &str, message: &str) {
        log::error!("{}: {} (window {:?})", title, message, window);
    }
}

/// Prompter that declines everything.
///
/// Use this when there is no terminal to ask on.
pub struct SafePrompter;

impl Prompter for SafePrompter {
    fn confirm(&self, _window: WindowId, _question: &Question<'_>) -> bool {
        false
    }

    fn choose_open_path(&self, _window: Option<WindowId>, _filters: &[FileKind]) -> Option<PathBuf> {
        None
    }

    fn choose_save_path(
        &self,
        _window: WindowId,
        _kind: FileKind,
        _suggested: Option<&Path>,
    ) -> Option<PathBuf> {
        None
    }

    fn show_error(&self, window: Option<WindowId>, title: &str, message: &str) {
        log::error!("{}: {} (window {:?})", title, message, window);
    }
}
