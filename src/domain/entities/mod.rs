//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `DocumentWindow` - A window and the document it shows

mod document;

pub use document::{DocumentWindow, SyncState};
