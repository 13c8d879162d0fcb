//! Infrastructure implementations for Shell

mod recent;
mod system;

pub use recent::{RecentDocuments, MAX_RECENT};
pub use system::SystemShell;
