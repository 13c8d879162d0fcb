//! Document file types
//!
//! The core treats content as opaque text; the kind only decides which
//! dialog filters to show and which files may be opened.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Kind of document file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    Markdown,
    PlainText,
    Html,
}

impl FileKind {
    /// Kinds accepted by "open file"
    pub const OPENABLE: [FileKind; 2] = [FileKind::Markdown, FileKind::PlainText];

    /// Classify `path` by extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(FileKind::Markdown),
            "txt" => Some(FileKind::PlainText),
            "html" | "htm" => Some(FileKind::Html),
            _ => None,
        }
    }

    /// File extensions for dialog filters, preferred extension first
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::Markdown => &["md", "markdown"],
            FileKind::PlainText => &["txt"],
            FileKind::Html => &["html", "htm"],
        }
    }

    /// Filter name shown in file dialogs
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Markdown => "Markdown Files",
            FileKind::PlainText => "Text Files",
            FileKind::Html => "HTML Files",
        }
    }

    pub fn is_openable(self) -> bool {
        Self::OPENABLE.contains(&self)
    }

    /// `path` with this kind's preferred extension appended when it has
    /// none of this kind's extensions.
    pub fn ensure_extension(self, path: PathBuf) -> PathBuf {
        if FileKind::from_path(&path) == Some(self) {
            return path;
        }
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(self.extensions()[0]);
        PathBuf::from(name)
    }

    /// Whether `path` may be opened into a document window
    pub fn can_open(path: &Path) -> bool {
        Self::from_path(path).map(FileKind::is_openable).unwrap_or(false)
    }
}

/// What a save accelerator asks the focused window to save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveKind {
    Markdown,
    Html,
}

impl SaveKind {
    /// File kind written by this save
    pub fn file_kind(self) -> FileKind {
        match self {
            SaveKind::Markdown => FileKind::Markdown,
            SaveKind::Html => FileKind::Html,
        }
    }
}

impl std::fmt::Display for SaveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveKind::Markdown => write!(f, "markdown"),
            SaveKind::Html => write!(f, "html"),
        }
    }
}
