//! Window Registry
//!
//! Sole owner of the live window set. New windows cascade from the focused
//! one; the toolkit only shows a window once its content reports ready.

use std::collections::BTreeMap;

use crate::config::WindowConfig;
use crate::domain::entities::DocumentWindow;
use crate::domain::ports::WindowToolkit;
use crate::domain::value_objects::{Placement, Position, WindowId};
use crate::error::{FireSaleError, FireSaleResult};

pub struct WindowRegistry {
    toolkit: Box<dyn WindowToolkit>,
    windows: BTreeMap<WindowId, DocumentWindow>,
    focused: Option<WindowId>,
    next_id: u64,
    cascade_offset: i32,
    default_position: Option<Position>,
}

impl WindowRegistry {
    pub fn new(toolkit: Box<dyn WindowToolkit>, config: &WindowConfig) -> Self {
        Self {
            toolkit,
            windows: BTreeMap::new(),
            focused: None,
            next_id: 1,
            cascade_offset: config.cascade_offset,
            default_position: config.default_position(),
        }
    }

    /// Allocate a hidden window and give it focus.
    pub fn create_window(&mut self) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;

        let placement = match self.focused.and_then(|f| self.windows.get(&f)) {
            Some(focused) => Placement::At(focused.position().cascaded(self.cascade_offset)),
            None => self
                .default_position
                .map(Placement::At)
                .unwrap_or(Placement::Default),
        };

        let position = self.toolkit.create(id, placement);
        self.windows.insert(id, DocumentWindow::new(id, position));
        self.focused = Some(id);
        log::debug!("registered window {} ({} live)", id, self.windows.len());
        id
    }

    /// Show the window now that its content has loaded.
    ///
    /// Returns `false` if it was already shown.
    pub fn mark_ready(&mut self, id: WindowId) -> FireSaleResult<bool> {
        let window = self
            .windows
            .get_mut(&id)
            .ok_or(FireSaleError::UnknownWindow(id))?;
        if window.is_ready() {
            return Ok(false);
        }
        window.mark_ready();
        self.toolkit.show(id);
        Ok(true)
    }

    /// Remove the window from the live set and destroy the native window.
    pub fn destroy_window(&mut self, id: WindowId) -> Option<DocumentWindow> {
        let removed = self.windows.remove(&id)?;
        self.toolkit.destroy(id);
        if self.focused == Some(id) {
            // Most recently created survivor takes focus
            self.focused = self.windows.keys().next_back().copied();
        }
        log::debug!("unregistered window {} ({} live)", id, self.windows.len());
        Some(removed)
    }

    pub fn focus(&mut self, id: WindowId) -> FireSaleResult<()> {
        if !self.windows.contains_key(&id) {
            return Err(FireSaleError::UnknownWindow(id));
        }
        self.focused = Some(id);
        Ok(())
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn get(&self, id: WindowId) -> Option<&DocumentWindow> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut DocumentWindow> {
        self.windows.get_mut(&id)
    }

    /// Like `get`, but an unknown id is an error
    pub fn document(&self, id: WindowId) -> FireSaleResult<&DocumentWindow> {
        self.windows.get(&id).ok_or(FireSaleError::UnknownWindow(id))
    }

    pub fn document_mut(&mut self, id: WindowId) -> FireSaleResult<&mut DocumentWindow> {
        self.windows
            .get_mut(&id)
            .ok_or(FireSaleError::UnknownWindow(id))
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentWindow> {
        self.windows.values()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows that have been shown
    pub fn visible_count(&self) -> usize {
        self.windows.values().filter(|w| w.is_ready()).count()
    }

    /// Push the window's derived title and edited flag to the toolkit.
    ///
    /// Returns the projection that was written.
    pub fn project_edit_state(&mut self, id: WindowId, app_title: &str) -> Option<(bool, String)> {
        let window = self.windows.get(&id)?;
        let edited = window.is_edited();
        let title = window.title(app_title);
        self.toolkit.set_title(id, &title);
        self.toolkit.set_document_edited(id, edited);
        Some((edited, title))
    }
}
