//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//!
//! - `fs/` - `LocalFileStore` (atomic writes, `notify` watching)
//! - `prompt/` - `InteractivePrompter` (terminal dialogs)
//! - `toolkit/` - `TerminalToolkit` (virtual windows)
//! - `shell/` - `SystemShell` (recent documents, reveal, open)
//! - `events/` - notification sinks (text, NDJSON)

pub mod events;
pub mod fs;
pub mod prompt;
pub mod shell;
pub mod toolkit;

pub use events::{JsonNotificationSink, TextNotificationSink};
pub use fs::LocalFileStore;
pub use prompt::InteractivePrompter;
pub use shell::SystemShell;
pub use toolkit::TerminalToolkit;
