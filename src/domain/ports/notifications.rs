//! UI Notification Port
//!
//! Messages the host sends to window UI processes. Each notification is an
//! operation name plus payload, so the transport (IPC, stdout, a test
//! recorder) is interchangeable.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{SaveKind, WindowId};

/// Notification emitted by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Notification {
    /// A new (hidden) window exists
    WindowCreated { window: WindowId },

    /// The window finished loading and is visible
    WindowShown { window: WindowId },

    /// A file was loaded into the window
    FileOpened {
        window: WindowId,
        path: PathBuf,
        content: String,
    },

    /// The bound file changed on disk and the window took the new content
    FileChanged {
        window: WindowId,
        path: PathBuf,
        content: String,
    },

    /// Local edits were thrown away; the window shows `content` again
    ContentReverted { window: WindowId, content: String },

    /// A menu accelerator asks the window to hand over its content
    SaveRequested { window: WindowId, kind: SaveKind },

    /// Edited flag or title changed
    DocumentEdited {
        window: WindowId,
        edited: bool,
        title: String,
    },

    /// The window is gone
    WindowClosed { window: WindowId },

    /// An operation failed and the user was told
    Error {
        window: Option<WindowId>,
        title: String,
        message: String,
    },

    /// The application is exiting
    Quit,
}

impl Notification {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Window the notification is addressed to, if any
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Notification::WindowCreated { window }
            | Notification::WindowShown { window }
            | Notification::FileOpened { window, .. }
            | Notification::FileChanged { window, .. }
            | Notification::ContentReverted { window, .. }
            | Notification::SaveRequested { window, .. }
            | Notification::DocumentEdited { window, .. }
            | Notification::WindowClosed { window } => Some(*window),
            Notification::Error { window, .. } => *window,
            Notification::Quit => None,
        }
    }
}

/// Trait for receiving notifications
///
/// Implementations can be:
/// - TextNotificationSink: human-readable lines
/// - JsonNotificationSink: NDJSON stream
/// - NoopNotificationSink: silent operation
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// No-op sink for silent operation
pub struct NoopNotificationSink;

impl NotificationSink for NoopNotificationSink {
    fn notify(&self, _notification: Notification) {}
}
