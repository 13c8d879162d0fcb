//! Sync Module
//!
//! Binds document windows to files on disk.
//!
//! ## Structure
//!
//! - `options` - Behaviour switches (`SyncOptions`)
//! - `controller` - The per-window state machine (`SyncController`)
//!
//! ## Usage
//!
//! ```ignore
//! use firesale::application::{SyncController, SyncOptions, WindowRegistry};
//!
//! let mut sync = SyncController::new(registry, store, prompter, shell, sink, tx, SyncOptions::default());
//! let window = sync.create_window();
//! sync.open_file(window, "notes.md")?;
//! ```

mod controller;
mod options;

pub use controller::{ChangeOutcome, SyncController};
pub use options::SyncOptions;
