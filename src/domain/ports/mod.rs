//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_store;
pub mod notifications;
pub mod prompter;
pub mod shell;
pub mod window_toolkit;

pub use file_store::{
    ChangeCallback, FileStore, FsError, FsResult, WatchActivation, WatchSubscription,
};
pub use notifications::{Notification, NotificationSink, NoopNotificationSink};
pub use prompter::{ForcePrompter, Prompter, Question, SafePrompter};
pub use shell::{NoopShell, Shell, ShellError, ShellResult};
pub use window_toolkit::WindowToolkit;
