//! Window identity and geometry

use serde::{Deserialize, Serialize};

/// Opaque handle to a toolkit window.
///
/// Allocated by the registry in increasing order and never reused within a
/// session, so a stale handle can never address a newer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(u64);

impl WindowId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Top-left corner of a window, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The same position shifted down and right by `offset` pixels.
    pub fn cascaded(self, offset: i32) -> Self {
        Self {
            x: self.x.saturating_add(offset),
            y: self.y.saturating_add(offset),
        }
    }
}

/// Where the toolkit should put a new window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Let the toolkit decide
    Default,
    /// Put the window at this position
    At(Position),
}
