//! Domain Layer
//!
//! Document state and the interfaces the host needs from the outside world.
//!
//! ## Structure
//!
//! - `entities/` - `DocumentWindow` and its derived `SyncState`
//! - `value_objects/` - Immutable value types (WindowId, FileKind, ContentHash)
//! - `ports/` - Interface definitions for infrastructure (FileStore, Prompter,
//!   WindowToolkit, Shell, NotificationSink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or a GUI directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
