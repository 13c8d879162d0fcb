//! JSON Notification Sink
//!
//! Outputs host notifications as NDJSON for UI processes and automation.

use crate::domain::ports::{Notification, NotificationSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Notification sink that writes one JSON object per line
pub struct JsonNotificationSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonNotificationSink {
    /// Create a new JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl NotificationSink for JsonNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", notification.to_json());
            let _ = writer.flush();
        }
    }
}
