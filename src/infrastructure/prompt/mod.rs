//! Infrastructure implementations for Prompter
//!
//! This module provides concrete implementations of the `Prompter` trait.

mod diff;
mod interactive;

pub use diff::external_change_diff;
pub use interactive::InteractivePrompter;
