//! Application Factory
//!
//! Creates the host with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::sync::mpsc;
use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::application::{Application, SyncController, SyncOptions, WindowRegistry};
use crate::config::{Config, Verbosity};
use crate::domain::ports::{
    ForcePrompter, NoopNotificationSink, NotificationSink, Prompter, SafePrompter, Shell,
};
use crate::infrastructure::{
    InteractivePrompter, JsonNotificationSink, LocalFileStore, SystemShell, TerminalToolkit,
    TextNotificationSink,
};

use super::terminal_ui::TerminalUi;

/// Type alias for the host with all concrete dependencies
pub type ConcreteApplication = Application<LocalFileStore, Box<dyn Prompter>>;

/// A wired host plus the terminal stand-in for the window UIs
pub struct Host {
    pub app: ConcreteApplication,
    pub ui: Arc<TerminalUi>,
}

/// Pick the prompter for this session
///
/// `--yes` confirms everything; without a terminal nothing can be asked, so
/// every question is declined.
pub fn create_prompter(yes: bool) -> Box<dyn Prompter> {
    if yes {
        Box::new(ForcePrompter)
    } else if std::io::stdin().is_terminal() {
        Box::new(InteractivePrompter::new())
    } else {
        Box::new(SafePrompter)
    }
}

/// Notification output for the configured format
pub fn create_sink(config: &Config) -> Arc<dyn NotificationSink> {
    if config.output.json {
        Arc::new(JsonNotificationSink::stdout())
    } else if config.output.verbosity == Verbosity::Quiet {
        Arc::new(NoopNotificationSink)
    } else {
        Arc::new(TextNotificationSink::stdout())
    }
}

/// Create the host with all dependencies wired up
pub fn create_application(config: &Config, prompter: Box<dyn Prompter>) -> Host {
    let (tx, rx) = mpsc::channel();

    let ui = Arc::new(TerminalUi::new(create_sink(config), tx.clone()));
    let sink: Arc<dyn NotificationSink> = ui.clone();

    let registry = WindowRegistry::new(Box::new(TerminalToolkit::new()), &config.window);
    let store = LocalFileStore::with_debounce(config.watch.debounce_ms);
    let shell: Box<dyn Shell> = Box::new(SystemShell::new());

    let sync = SyncController::new(
        registry,
        store,
        prompter,
        shell,
        sink,
        tx.clone(),
        SyncOptions::from_config(config),
    );

    Host {
        app: Application::new(sync, tx, rx, config.app.resident),
        ui,
    }
}
