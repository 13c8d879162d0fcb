//! Host event queue schema
//!
//! Everything that can change host state arrives as a `HostEvent` on one
//! queue: requests from window UIs, readiness signals, OS requests and
//! file-watch notifications.

use std::path::PathBuf;

use crate::domain::value_objects::{SaveKind, WindowId};

/// Identifies one activation of a window's file watch.
///
/// Changes from an older activation are stale and ignored.
pub type WatchGeneration = u64;

/// Request from a window UI (buttons, menu items, keystrokes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiRequest {
    /// "New File"
    CreateWindow,
    /// "Open File" with a dialog; `None` targets the focused window, or a
    /// new one when nothing is focused
    OpenFromUser { window: Option<WindowId> },
    /// Open a known path (drag and drop, recent documents)
    OpenFile {
        window: Option<WindowId>,
        path: PathBuf,
    },
    /// The window's text changed
    Edit {
        window: WindowId,
        content: String,
    },
    SaveMarkdown {
        window: WindowId,
        content: String,
    },
    SaveHtml {
        window: WindowId,
        html: String,
    },
    Revert { window: WindowId },
    Close { window: WindowId },
    Focus { window: WindowId },
    ShowInFolder { window: WindowId },
    OpenInDefaultApp { window: WindowId },
    /// Save / Export accelerator, routed to the focused window
    RequestSave { kind: SaveKind },
}

/// Event drained by the application loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Ui(UiRequest),
    /// The window's content finished its initial load
    WindowReady(WindowId),
    /// The OS asked to open a file (file association, dock drop)
    OpenFileRequest(PathBuf),
    /// The application was activated (dock icon click)
    Activate,
    /// A watched file changed on disk
    FileChanged {
        window: WindowId,
        generation: WatchGeneration,
        content: String,
    },
    /// Explicit quit (menu, Ctrl+C)
    Quit,
}

impl From<UiRequest> for HostEvent {
    fn from(request: UiRequest) -> Self {
        HostEvent::Ui(request)
    }
}
