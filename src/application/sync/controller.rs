//! Sync Controller
//!
//! Per-window state machine between the UI, the file store and the user:
//! 1. Open: prompt over unsaved edits, read, bind, re-watch
//! 2. Edit: recompute the edited flag
//! 3. External change: drop stale and echoed events, ask, reconcile
//! 4. Save / export: pick a destination when needed, write, rebind
//! 5. Close: prompt over unsaved edits, cancel the watch, destroy
//!
//! Every transition ends by projecting the edited flag and title onto the
//! window. The controller is the sole owner of the watch table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::application::event::{HostEvent, WatchGeneration};
use crate::application::registry::WindowRegistry;
use crate::domain::entities::DocumentWindow;
use crate::domain::ports::{
    ChangeCallback, FileStore, Notification, NotificationSink, Prompter, Question, Shell,
    WatchSubscription,
};
use crate::domain::value_objects::{FileKind, SaveKind, WindowId};
use crate::error::{FireSaleError, FireSaleResult};

use super::options::SyncOptions;

const CANNOT_OPEN: &str = "Cannot Open File";
const CANNOT_SAVE: &str = "Cannot Save File";
const CANNOT_EXPORT: &str = "Cannot Export HTML";
const CANNOT_SHOW: &str = "Cannot show file";
const NO_FILE_OPEN: &str = "No file is open";
const CANNOT_SAVE_OR_EXPORT: &str = "Cannot Save or Export";
const NO_ACTIVE_DOCUMENT: &str = "There is currently no active document to save or export.";

/// What happened to a file-change event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The watch that produced it has since been cancelled
    Stale,
    /// Disk content equals what the window last loaded or saved
    Unchanged,
    /// The window took the disk content
    Reloaded,
    /// The user kept the local text
    Kept,
}

struct ActiveWatch {
    generation: WatchGeneration,
    subscription: WatchSubscription,
}

/// Sync controller - reconciles windows, files and the user
///
/// Parameterized by the file store and prompter ports so tests can swap in
/// in-memory and scripted implementations.
pub struct SyncController<FS, P>
where
    FS: FileStore,
    P: Prompter,
{
    registry: WindowRegistry,
    store: FS,
    prompter: P,
    shell: Box<dyn Shell>,
    sink: Arc<dyn NotificationSink>,
    events: Sender<HostEvent>,
    watches: HashMap<WindowId, ActiveWatch>,
    next_generation: WatchGeneration,
    options: SyncOptions,
}

impl<FS, P> SyncController<FS, P>
where
    FS: FileStore,
    P: Prompter,
{
    pub fn new(
        registry: WindowRegistry,
        store: FS,
        prompter: P,
        shell: Box<dyn Shell>,
        sink: Arc<dyn NotificationSink>,
        events: Sender<HostEvent>,
        options: SyncOptions,
    ) -> Self {
        Self {
            registry,
            store,
            prompter,
            shell,
            sink,
            events,
            watches: HashMap::new(),
            next_generation: 1,
            options,
        }
    }

    // === Accessors ===

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn document(&self, window: WindowId) -> FireSaleResult<&DocumentWindow> {
        self.registry.document(window)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.registry.focused()
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn store(&self) -> &FS {
        &self.store
    }

    pub fn sink(&self) -> &Arc<dyn NotificationSink> {
        &self.sink
    }

    pub fn has_watch(&self, window: WindowId) -> bool {
        self.watches.contains_key(&window)
    }

    /// Generation of the window's active watch
    pub fn watch_generation(&self, window: WindowId) -> Option<WatchGeneration> {
        self.watches.get(&window).map(|w| w.generation)
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Windows with unsaved edits, oldest first
    pub fn dirty_windows(&self) -> Vec<WindowId> {
        self.registry
            .iter()
            .filter(|w| w.state().is_dirty())
            .map(DocumentWindow::id)
            .collect()
    }

    // === Window lifecycle ===

    /// Create a hidden, untitled window and focus it.
    pub fn create_window(&mut self) -> WindowId {
        let window = self.registry.create_window();
        self.sink.notify(Notification::WindowCreated { window });
        self.publish(window);
        window
    }

    /// The window's content finished loading; show it.
    ///
    /// Returns `false` if it was already visible.
    pub fn window_ready(&mut self, window: WindowId) -> FireSaleResult<bool> {
        let shown = self.registry.mark_ready(window)?;
        if shown {
            log::debug!("window {} shown", window);
            self.sink.notify(Notification::WindowShown { window });
        }
        Ok(shown)
    }

    pub fn focus(&mut self, window: WindowId) -> FireSaleResult<()> {
        self.registry.focus(window)
    }

    // === Open ===

    /// Load `path` into `window`, replacing whatever it showed.
    pub fn open_file(&mut self, window: WindowId, path: impl AsRef<Path>) -> FireSaleResult<()> {
        let path = absolute(path.as_ref());
        let dirty = self.registry.document(window)?.state().is_dirty();

        if !FileKind::can_open(&path) {
            let message = format!("{} is not a markdown or text file.", path.display());
            self.report(Some(window), CANNOT_OPEN, &message);
            return Err(FireSaleError::UnsupportedFileType(path));
        }

        if dirty
            && !self
                .prompter
                .confirm(window, &Question::OverwriteUnsaved { incoming: &path })
        {
            log::debug!("open of {} declined for window {}", path.display(), window);
            return Err(FireSaleError::UserCancelled);
        }

        let content = match self.store.read(&path) {
            Ok(content) => content,
            Err(err) => {
                let err = FireSaleError::io(&path, err);
                self.report(Some(window), CANNOT_OPEN, &err.to_string());
                return Err(err);
            }
        };

        self.registry
            .document_mut(window)?
            .bind(path.clone(), content.clone());
        self.rewatch(window, &path, &content);
        self.register_with_shell(window, &path);

        log::debug!("window {} opened {}", window, path.display());
        self.sink.notify(Notification::FileOpened {
            window,
            path,
            content,
        });
        self.publish(window);
        Ok(())
    }

    /// Ask the user for a file to open. `None` means there is no window yet.
    pub fn choose_file_to_open(&self, window: Option<WindowId>) -> FireSaleResult<PathBuf> {
        self.prompter
            .choose_open_path(window, &FileKind::OPENABLE)
            .ok_or(FireSaleError::UserCancelled)
    }

    /// "Open File": pick a file with the dialog and load it into `window`.
    pub fn open_file_from_user(&mut self, window: WindowId) -> FireSaleResult<()> {
        self.registry.document(window)?;
        let path = self.choose_file_to_open(Some(window))?;
        self.open_file(window, path)
    }

    // === Edit ===

    /// Content typed in the window. Returns the new edited flag.
    pub fn user_edits(&mut self, window: WindowId, content: impl Into<String>) -> FireSaleResult<bool> {
        let document = self.registry.document_mut(window)?;
        let was_edited = document.is_edited();
        let edited = document.apply_edit(content);
        if edited != was_edited {
            self.publish(window);
        }
        Ok(edited)
    }

    /// Throw local edits away and show the last loaded or saved content.
    pub fn revert(&mut self, window: WindowId) -> FireSaleResult<()> {
        let content = self.registry.document_mut(window)?.revert().to_string();
        log::debug!("window {} reverted", window);
        self.sink
            .notify(Notification::ContentReverted { window, content });
        self.publish(window);
        Ok(())
    }

    // === External change ===

    /// Reconcile content another process wrote to the window's file.
    pub fn external_change(
        &mut self,
        window: WindowId,
        generation: WatchGeneration,
        content: String,
    ) -> FireSaleResult<ChangeOutcome> {
        match self.watches.get(&window) {
            Some(watch) if watch.generation == generation => {}
            _ => {
                log::debug!(
                    "dropping stale change for window {} (generation {})",
                    window,
                    generation
                );
                return Ok(ChangeOutcome::Stale);
            }
        }

        let document = self.registry.document(window)?;
        if content == document.last_saved_content() {
            return Ok(ChangeOutcome::Unchanged);
        }
        let Some(path) = document.file_path().map(Path::to_path_buf) else {
            return Ok(ChangeOutcome::Stale);
        };

        let accepted = self.prompter.confirm(
            window,
            &Question::ExternalChange {
                path: &path,
                local: document.current_content(),
                incoming: &content,
            },
        );
        let reload = accepted || self.options.reload_on_decline;

        self.registry
            .document_mut(window)?
            .accept_disk_content(content.clone(), reload);

        let outcome = if reload {
            log::debug!("window {} reloaded {}", window, path.display());
            self.sink.notify(Notification::FileChanged {
                window,
                path,
                content,
            });
            ChangeOutcome::Reloaded
        } else {
            log::debug!("window {} kept local text over {}", window, path.display());
            ChangeOutcome::Kept
        };
        self.publish(window);
        Ok(outcome)
    }

    // === Save ===

    /// Write the window's markdown, asking for a destination if untitled.
    ///
    /// Returns the path written.
    pub fn save_markdown(
        &mut self,
        window: WindowId,
        content: impl Into<String>,
    ) -> FireSaleResult<PathBuf> {
        let content = content.into();
        let bound = self
            .registry
            .document(window)?
            .file_path()
            .map(Path::to_path_buf);

        let path = match bound {
            Some(path) => path,
            None => {
                let chosen = self
                    .prompter
                    .choose_save_path(window, FileKind::Markdown, None)
                    .ok_or(FireSaleError::UserCancelled)?;
                absolute(&FileKind::Markdown.ensure_extension(chosen))
            }
        };

        if let Err(err) = self.store.write(&path, &content) {
            let err = FireSaleError::io(&path, err);
            self.report(Some(window), CANNOT_SAVE, &err.to_string());
            return Err(err);
        }

        let document = self.registry.document_mut(window)?;
        let rebound = document.file_path() != Some(path.as_path());
        document.bind(path.clone(), content.clone());
        // A failed watch is retried on the next save
        if rebound || !self.has_watch(window) {
            self.rewatch(window, &path, &content);
        }
        self.register_with_shell(window, &path);

        log::debug!("window {} saved {}", window, path.display());
        self.publish(window);
        Ok(path)
    }

    /// Export rendered HTML to a file the user picks.
    ///
    /// One-shot: the window's file and edited flag are untouched.
    pub fn save_html(&mut self, window: WindowId, html: &str) -> FireSaleResult<PathBuf> {
        let suggested = self
            .registry
            .document(window)?
            .file_path()
            .map(|p| p.with_extension(FileKind::Html.extensions()[0]));

        let chosen = self
            .prompter
            .choose_save_path(window, FileKind::Html, suggested.as_deref())
            .ok_or(FireSaleError::UserCancelled)?;
        let path = absolute(&FileKind::Html.ensure_extension(chosen));

        if let Err(err) = self.store.write(&path, html) {
            let err = FireSaleError::io(&path, err);
            self.report(Some(window), CANNOT_EXPORT, &err.to_string());
            return Err(err);
        }
        log::debug!("window {} exported {}", window, path.display());
        Ok(path)
    }

    /// Menu accelerator: ask the focused window for its content.
    pub fn request_save(&mut self, kind: SaveKind) -> FireSaleResult<WindowId> {
        match self.registry.focused() {
            Some(window) => {
                self.sink
                    .notify(Notification::SaveRequested { window, kind });
                Ok(window)
            }
            None => {
                self.report(None, CANNOT_SAVE_OR_EXPORT, NO_ACTIVE_DOCUMENT);
                Err(FireSaleError::NoFocusedWindow)
            }
        }
    }

    // === OS integration ===

    pub fn show_in_folder(&mut self, window: WindowId) -> FireSaleResult<()> {
        let path = self.bound_path(window)?;
        if let Err(err) = self.shell.show_in_folder(&path) {
            log::warn!("could not reveal {}: {}", path.display(), err);
        }
        Ok(())
    }

    pub fn open_in_default_app(&mut self, window: WindowId) -> FireSaleResult<()> {
        let path = self.bound_path(window)?;
        if let Err(err) = self.shell.open_in_default_app(&path) {
            log::warn!("could not open {}: {}", path.display(), err);
        }
        Ok(())
    }

    // === Close ===

    /// Close `window`, asking first if it has unsaved edits.
    pub fn close_window(&mut self, window: WindowId) -> FireSaleResult<()> {
        let document = self.registry.document(window)?;
        if document.state().is_dirty() {
            let title = display_name(document.file_path());
            if !self
                .prompter
                .confirm(window, &Question::CloseUnsaved { title: &title })
            {
                log::debug!("close of window {} cancelled", window);
                return Err(FireSaleError::UserCancelled);
            }
        }
        self.force_close(window)
    }

    /// The window's close button.
    pub fn request_close(&mut self, window: WindowId) -> FireSaleResult<()> {
        self.close_window(window)
    }

    /// Close `window` without asking.
    pub fn force_close(&mut self, window: WindowId) -> FireSaleResult<()> {
        self.registry.document(window)?;
        self.unwatch(window);
        self.registry.destroy_window(window);
        log::debug!("window {} closed", window);
        self.sink.notify(Notification::WindowClosed { window });
        Ok(())
    }

    // === Internals ===

    fn bound_path(&self, window: WindowId) -> FireSaleResult<PathBuf> {
        match self.registry.document(window)?.file_path() {
            Some(path) => Ok(path.to_path_buf()),
            None => {
                self.report(Some(window), CANNOT_SHOW, NO_FILE_OPEN);
                Err(FireSaleError::Untitled(window))
            }
        }
    }

    /// Cancel the window's watch (if any) and start one on `path`.
    ///
    /// `baseline` is the content the window now holds as saved.
    fn rewatch(&mut self, window: WindowId, path: &Path, baseline: &str) {
        self.unwatch(window);
        if !self.options.watch_enabled {
            return;
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let events = self.events.clone();
        let on_change: ChangeCallback = Box::new(move |content| {
            // The receiver is gone only while the host shuts down
            let _ = events.send(HostEvent::FileChanged {
                window,
                generation,
                content,
            });
        });

        match self.store.watch(path, baseline, on_change) {
            Ok(subscription) => {
                log::debug!(
                    "watching {} for window {} (generation {})",
                    path.display(),
                    window,
                    generation
                );
                self.watches.insert(
                    window,
                    ActiveWatch {
                        generation,
                        subscription,
                    },
                );
            }
            Err(err) => {
                let err = FireSaleError::Watch {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                };
                log::warn!("{}", err);
            }
        }
    }

    fn unwatch(&mut self, window: WindowId) -> bool {
        match self.watches.remove(&window) {
            Some(mut watch) => {
                watch.subscription.cancel();
                log::debug!(
                    "stopped watching {} for window {}",
                    watch.subscription.path().display(),
                    window
                );
                true
            }
            None => false,
        }
    }

    fn register_with_shell(&mut self, window: WindowId, path: &Path) {
        if let Err(err) = self.shell.add_recent_document(path) {
            log::warn!("could not add {} to recent documents: {}", path.display(), err);
        }
        if let Err(err) = self.shell.set_represented_file(window, Some(path)) {
            log::warn!("could not set represented file for window {}: {}", window, err);
        }
    }

    /// Write the edited flag and title to the window.
    fn publish(&mut self, window: WindowId) {
        if let Some((edited, title)) = self
            .registry
            .project_edit_state(window, &self.options.app_title)
        {
            self.sink.notify(Notification::DocumentEdited {
                window,
                edited,
                title,
            });
        }
    }

    fn report(&self, window: Option<WindowId>, title: &str, message: &str) {
        log::error!("{}: {}", title, message);
        self.prompter.show_error(window, title, message);
        self.sink.notify(Notification::Error {
            window,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn display_name(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
