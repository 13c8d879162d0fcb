//! Fire Sale - window lifecycle and file synchronization host
//!
//! The host side of a desktop markdown editor: it creates and destroys
//! document windows, binds each to at most one file, saves edits, watches
//! the file for changes made by other programs and settles conflicts with
//! the user.
//!
//! ## Layers
//!
//! - `domain` - window state, value objects and the ports to the outside
//! - `application` - registry, sync controller and the event loop
//! - `infrastructure` - disk, `notify` watching, dialogs, OS integration
//! - `presentation` - CLI and the terminal stand-in for window UIs

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    Application, ChangeOutcome, HostEvent, LoopControl, SyncController, SyncOptions, UiRequest,
    WindowRegistry,
};
pub use config::Config;
pub use domain::entities::{DocumentWindow, SyncState};
pub use domain::value_objects::{FileKind, SaveKind, WindowId};
pub use error::{FireSaleError, FireSaleResult};
