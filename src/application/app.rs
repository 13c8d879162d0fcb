//! Application lifecycle
//!
//! Drains the host event queue one event at a time and applies the
//! process-level rules around the sync controller:
//! - the last window closing ends the process unless it is resident
//! - activating a resident process with no windows opens one
//! - OS "open this file" requests get a new window, loaded once ready
//! - quitting asks about every window with unsaved edits

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::domain::ports::{FileStore, Notification, Prompter};
use crate::domain::value_objects::WindowId;
use crate::error::{FireSaleError, FireSaleResult};

use super::event::{HostEvent, UiRequest};
use super::sync::SyncController;

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct Application<FS, P>
where
    FS: FileStore,
    P: Prompter,
{
    sync: SyncController<FS, P>,
    sender: Sender<HostEvent>,
    events: Receiver<HostEvent>,
    resident: bool,
    /// Files to load once the window reports ready
    pending_opens: HashMap<WindowId, PathBuf>,
    /// Windows that show the open dialog once ready
    pending_dialogs: HashSet<WindowId>,
    exited: bool,
}

impl<FS, P> Application<FS, P>
where
    FS: FileStore,
    P: Prompter,
{
    /// `sender` must be the sender the controller was built with.
    pub fn new(
        sync: SyncController<FS, P>,
        sender: Sender<HostEvent>,
        events: Receiver<HostEvent>,
        resident: bool,
    ) -> Self {
        Self {
            sync,
            sender,
            events,
            resident,
            pending_opens: HashMap::new(),
            pending_dialogs: HashSet::new(),
            exited: false,
        }
    }

    pub fn sync(&self) -> &SyncController<FS, P> {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut SyncController<FS, P> {
        &mut self.sync
    }

    /// Handle for posting events from other threads
    pub fn sender(&self) -> Sender<HostEvent> {
        self.sender.clone()
    }

    pub fn is_resident(&self) -> bool {
        self.resident
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Launch: one window per file, or a single empty window.
    pub fn start(&mut self, files: &[PathBuf]) {
        if files.is_empty() {
            self.sync.create_window();
            return;
        }
        for file in files {
            self.open_in_new_window(file);
        }
    }

    /// Block on the queue until the application exits.
    pub fn run(&mut self) {
        while !self.exited {
            match self.events.recv() {
                Ok(event) => {
                    self.handle(event);
                }
                Err(_) => break,
            }
        }
    }

    /// Handle everything already queued.
    pub fn run_pending(&mut self) -> LoopControl {
        loop {
            if self.exited {
                return LoopControl::Exit;
            }
            match self.events.try_recv() {
                Ok(event) => {
                    self.handle(event);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                    return LoopControl::Continue;
                }
            }
        }
    }

    /// Handle events as they arrive for `duration`, or until exit.
    pub fn wait(&mut self, duration: Duration) -> LoopControl {
        // No deadline fits in an `Instant`: wait until the queue closes
        let deadline = Instant::now().checked_add(duration);
        loop {
            if self.exited {
                return LoopControl::Exit;
            }
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => duration,
            };
            if remaining.is_zero() {
                return self.run_pending();
            }
            match self.events.recv_timeout(remaining) {
                Ok(event) => {
                    self.handle(event);
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return self.run_pending();
                }
            }
        }
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: HostEvent) -> LoopControl {
        if self.exited {
            return LoopControl::Exit;
        }
        log::debug!("handling {}", event_name(&event));

        let control = match event {
            HostEvent::Ui(request) => self.handle_request(request),
            HostEvent::WindowReady(window) => {
                self.window_ready(window);
                LoopControl::Continue
            }
            HostEvent::OpenFileRequest(path) => {
                self.open_in_new_window(&path);
                LoopControl::Continue
            }
            HostEvent::Activate => {
                self.activate();
                LoopControl::Continue
            }
            HostEvent::FileChanged {
                window,
                generation,
                content,
            } => {
                settle(self.sync.external_change(window, generation, content));
                LoopControl::Continue
            }
            HostEvent::Quit => self.quit(),
        };

        if control == LoopControl::Exit {
            self.exited = true;
        }
        control
    }

    fn handle_request(&mut self, request: UiRequest) -> LoopControl {
        match request {
            UiRequest::CreateWindow => {
                self.sync.create_window();
            }
            UiRequest::OpenFromUser { window } => match window.or(self.sync.focused()) {
                Some(window) => settle(self.sync.open_file_from_user(window)),
                None => {
                    let window = self.sync.create_window();
                    self.pending_dialogs.insert(window);
                }
            },
            UiRequest::OpenFile { window, path } => match window.or(self.sync.focused()) {
                Some(window) => settle(self.sync.open_file(window, &path)),
                None => self.open_in_new_window(&path),
            },
            UiRequest::Edit { window, content } => settle(self.sync.user_edits(window, content)),
            UiRequest::SaveMarkdown { window, content } => {
                settle(self.sync.save_markdown(window, content))
            }
            UiRequest::SaveHtml { window, html } => settle(self.sync.save_html(window, &html)),
            UiRequest::Revert { window } => settle(self.sync.revert(window)),
            UiRequest::Focus { window } => settle(self.sync.focus(window)),
            UiRequest::ShowInFolder { window } => settle(self.sync.show_in_folder(window)),
            UiRequest::OpenInDefaultApp { window } => {
                settle(self.sync.open_in_default_app(window))
            }
            UiRequest::RequestSave { kind } => settle(self.sync.request_save(kind)),
            UiRequest::Close { window } => match self.sync.close_window(window) {
                Ok(()) => {
                    self.forget(window);
                    return self.after_close();
                }
                Err(err) => settle::<()>(Err(err)),
            },
        }
        LoopControl::Continue
    }

    fn window_ready(&mut self, window: WindowId) {
        if let Err(err) = self.sync.window_ready(window) {
            settle::<()>(Err(err));
            return;
        }
        if let Some(path) = self.pending_opens.remove(&window) {
            settle(self.sync.open_file(window, &path));
        }
        if self.pending_dialogs.remove(&window) {
            settle(self.sync.open_file_from_user(window));
        }
    }

    fn open_in_new_window(&mut self, path: &Path) {
        let window = self.sync.create_window();
        self.pending_opens.insert(window, path.to_path_buf());
    }

    fn activate(&mut self) {
        if self.sync.registry().is_empty() {
            log::debug!("activated with no windows");
            self.sync.create_window();
        }
    }

    fn after_close(&mut self) -> LoopControl {
        if self.sync.registry().is_empty() && !self.resident {
            log::debug!("last window closed");
            self.sync.sink().notify(Notification::Quit);
            return LoopControl::Exit;
        }
        LoopControl::Continue
    }

    /// Close every window, asking about unsaved ones. Any "Cancel" aborts.
    fn quit(&mut self) -> LoopControl {
        for window in self.sync.dirty_windows() {
            if let Err(err) = self.sync.close_window(window) {
                if err.is_cancelled() {
                    log::debug!("quit cancelled at window {}", window);
                    return LoopControl::Continue;
                }
                settle::<()>(Err(err));
            }
            self.forget(window);
        }
        for window in self.sync.registry().ids() {
            settle(self.sync.force_close(window));
            self.forget(window);
        }
        self.sync.sink().notify(Notification::Quit);
        LoopControl::Exit
    }

    fn forget(&mut self, window: WindowId) {
        self.pending_opens.remove(&window);
        self.pending_dialogs.remove(&window);
    }
}

/// Log the failure of an operation the user has already been told about.
fn settle<T>(result: FireSaleResult<T>) {
    match result {
        Ok(_) => {}
        Err(FireSaleError::UserCancelled) => log::debug!("cancelled by user"),
        Err(err @ FireSaleError::UnknownWindow(_)) => log::warn!("{}", err),
        Err(err) => log::debug!("{}", err),
    }
}

fn event_name(event: &HostEvent) -> &'static str {
    match event {
        HostEvent::Ui(_) => "ui-request",
        HostEvent::WindowReady(_) => "window-ready",
        HostEvent::OpenFileRequest(_) => "open-file-request",
        HostEvent::Activate => "activate",
        HostEvent::FileChanged { .. } => "file-changed",
        HostEvent::Quit => "quit",
    }
}
