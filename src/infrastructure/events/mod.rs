//! Notification sink implementations

mod json;
mod text;

pub use json::JsonNotificationSink;
pub use text::{render, TextNotificationSink};
