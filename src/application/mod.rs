//! Application Layer
//!
//! Orchestrates windows, files and the user on top of the domain ports.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Owns all mutable host state (live windows, watch table)
//! - Is driven by one serialized `HostEvent` queue
//!
//! ## Components
//!
//! - `WindowRegistry` - live window set, cascading placement, focus
//! - `SyncController` - per-window open/edit/save/close state machine
//! - `Application` - event loop and process lifecycle rules

mod app;
pub mod event;
mod registry;
pub mod sync;

pub use app::{Application, LoopControl};
pub use event::{HostEvent, UiRequest, WatchGeneration};
pub use registry::WindowRegistry;
pub use sync::{ChangeOutcome, SyncController, SyncOptions};
