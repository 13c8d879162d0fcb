//! Infrastructure implementations for WindowToolkit

mod terminal;

pub use terminal::{TerminalToolkit, VirtualWindow, DEFAULT_ORIGIN};
