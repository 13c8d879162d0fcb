//! Window Toolkit Port
//!
//! The GUI toolkit as the registry sees it: native windows that can be
//! created, shown, titled and destroyed. Everything else about rendering
//! stays on the toolkit side.

use crate::domain::value_objects::{Placement, Position, WindowId};

pub trait WindowToolkit {
    /// Create a hidden native window for `id`. Returns where it was placed.
    fn create(&mut self, id: WindowId, placement: Placement) -> Position;

    /// Show a window once its content has loaded
    fn show(&mut self, id: WindowId);

    /// Destroy the native window
    fn destroy(&mut self, id: WindowId);

    fn set_title(&mut self, id: WindowId, title: &str);

    /// Title-bar "document edited" decoration
    fn set_document_edited(&mut self, id: WindowId, edited: bool);
}
