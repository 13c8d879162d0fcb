//! Diff shown behind "Show changes" in the external-change prompt

use similar::TextDiff;

/// Lines of context around each change
const CONTEXT_LINES: usize = 3;

/// Unified diff from the window's text to the text now on disk
pub fn external_change_diff(path: &str, local: &str, incoming: &str) -> String {
    let diff = TextDiff::from_lines(local, incoming);
    let local_label = format!("{} (window)", path);
    let disk_label = format!("{} (disk)", path);

    let mut unified = diff.unified_diff();
    let rendered = unified
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(false)
        .header(&local_label, &disk_label)
        .to_string();

    if rendered.is_empty() {
        format!("{}: no differences\n", path)
    } else {
        rendered
    }
}
