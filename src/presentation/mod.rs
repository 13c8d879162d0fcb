//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the host with infrastructure dependencies
//! - The terminal stand-in for the window UIs and menus
//!
//! ## Structure
//!
//! - `cli` - Command-line flags
//! - `factory` - Wires ports to adapters (dependency injection)
//! - `terminal_ui` - Window UI stand-in (buffers, save replies)
//! - `repl` - Menu and editor commands
//!
//! ## Usage
//!
//! ```ignore
//! use firesale::presentation::{factory, repl};
//!
//! let mut host = factory::create_application(&config, factory::create_prompter(false));
//! host.app.start(&files);
//! repl::run(&mut host)?;
//! ```

pub mod cli;
pub mod factory;
pub mod repl;
pub mod terminal_ui;

pub use cli::Cli;
pub use factory::{create_application, create_prompter, Host};
pub use terminal_ui::TerminalUi;
