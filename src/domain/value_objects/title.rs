//! Window title projection

use std::path::Path;

/// Application name shown in every title
pub const APP_TITLE: &str = "Fire Sale";

/// Title for a window showing `path` (or an untitled document).
///
/// `notes.md - Fire Sale (Edited)` style; untitled windows show just the
/// application name.
pub fn document_title(app_title: &str, path: Option<&Path>, edited: bool) -> String {
    let mut title = match path.and_then(|p| p.file_name()) {
        Some(name) => format!("{} - {}", name.to_string_lossy(), app_title),
        None => app_title.to_string(),
    };
    if edited {
        title.push_str(" (Edited)");
    }
    title
}
