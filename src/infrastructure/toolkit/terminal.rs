//! Terminal Window Toolkit
//!
//! Virtual windows for running the host without a GUI. Geometry, titles
//! and visibility are tracked so the session can list them, and every
//! change is logged.

use std::collections::BTreeMap;

use crate::domain::ports::WindowToolkit;
use crate::domain::value_objects::{Placement, Position, WindowId};

/// Where the toolkit puts a window when nothing dictates a position
pub const DEFAULT_ORIGIN: Position = Position { x: 80, y: 60 };

/// Snapshot of one virtual window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualWindow {
    pub position: Position,
    pub title: String,
    pub edited: bool,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct TerminalToolkit {
    windows: BTreeMap<WindowId, VirtualWindow>,
}

impl TerminalToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self, id: WindowId) -> Option<&VirtualWindow> {
        self.windows.get(&id)
    }

    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &VirtualWindow)> {
        self.windows.iter().map(|(id, w)| (*id, w))
    }
}

impl WindowToolkit for TerminalToolkit {
    fn create(&mut self, id: WindowId, placement: Placement) -> Position {
        let position = match placement {
            Placement::At(position) => position,
            Placement::Default => DEFAULT_ORIGIN,
        };
        log::info!("window {} created at ({}, {})", id, position.x, position.y);
        self.windows.insert(
            id,
            VirtualWindow {
                position,
                title: String::new(),
                edited: false,
                visible: false,
            },
        );
        position
    }

    fn show(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.visible = true;
            log::info!("window {} shown", id);
        }
    }

    fn destroy(&mut self, id: WindowId) {
        if self.windows.remove(&id).is_some() {
            log::info!("window {} destroyed", id);
        }
    }

    fn set_title(&mut self, id: WindowId, title: &str) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.title != title {
                log::debug!("window {} title: {}", id, title);
                window.title = title.to_string();
            }
        }
    }

    fn set_document_edited(&mut self, id: WindowId, edited: bool) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.edited = edited;
        }
    }
}
