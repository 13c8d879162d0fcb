//! Text Notification Sink
//!
//! Human-readable notification lines for interactive sessions.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{Notification, NotificationSink};

/// Longest content preview printed for open/change notifications
const PREVIEW_CHARS: usize = 60;

pub struct TextNotificationSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextNotificationSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

/// Render one notification as a line of text
pub fn render(notification: &Notification) -> String {
    match notification {
        Notification::WindowCreated { window } => format!("+ window {} created", window),
        Notification::WindowShown { window } => format!("  window {} ready", window),
        Notification::FileOpened {
            window,
            path,
            content,
        } => format!(
            "📂 [{}] opened {}: {}",
            window,
            path.display(),
            preview(content)
        ),
        Notification::FileChanged {
            window,
            path,
            content,
        } => format!(
            "📝 [{}] reloaded {}: {}",
            window,
            path.display(),
            preview(content)
        ),
        Notification::ContentReverted { window, content } => {
            format!("↩ [{}] reverted: {}", window, preview(content))
        }
        Notification::SaveRequested { window, kind } => {
            format!("💾 [{}] save requested ({})", window, kind)
        }
        Notification::DocumentEdited { window, title, .. } => {
            format!("  [{}] {}", window, title)
        }
        Notification::WindowClosed { window } => format!("- window {} closed", window),
        Notification::Error {
            window,
            title,
            message,
        } => match window {
            Some(window) => format!("✗ [{}] {}: {}", window, title, message),
            None => format!("✗ {}: {}", title, message),
        },
        Notification::Quit => "👋 Quitting".to_string(),
    }
}

fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut out: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || content.lines().nth(1).is_some() {
        out.push('…');
    }
    if out.is_empty() {
        out.push_str("(empty)");
    }
    out
}

impl NotificationSink for TextNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", render(&notification));
            let _ = writer.flush();
        }
    }
}
