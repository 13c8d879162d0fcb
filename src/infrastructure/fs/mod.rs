//! File store implementations

mod local;
mod watch;

pub use local::{atomic_write, LocalFileStore, DEFAULT_DEBOUNCE_MS};
