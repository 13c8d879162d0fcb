//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_kind;
mod hash;
mod title;
mod window;

pub use file_kind::{FileKind, SaveKind};
pub use hash::ContentHash;
pub use title::{document_title, APP_TITLE};
pub use window::{Placement, Position, WindowId};
