//! In-memory port implementations
//!
//! Every fake is a cheap `Clone` over shared state so a test keeps a handle
//! after moving one into the controller.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use firesale::domain::ports::{
    ChangeCallback, FileStore, FsError, FsResult, Notification, NotificationSink, Prompter,
    Question, Shell, ShellError, ShellResult, WatchActivation, WatchSubscription, WindowToolkit,
};
use firesale::domain::value_objects::{FileKind, Placement, Position, WindowId};

// === File store ===

struct WatchEntry {
    path: PathBuf,
    activation: WatchActivation,
    callback: ChangeCallback,
}

#[derive(Default)]
struct StoreState {
    files: HashMap<PathBuf, String>,
    watches: Vec<WatchEntry>,
    /// (path, number of other watches still active when it started)
    watch_starts: Vec<(PathBuf, usize)>,
    writes: Vec<PathBuf>,
    failing: HashSet<PathBuf>,
    /// Writes that land just before the next watch on their path starts
    racing: HashMap<PathBuf, String>,
}

#[derive(Clone, Default)]
pub struct MemoryFileStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.put(path, content);
        self
    }

    /// Place a file without notifying watchers
    pub fn put(&self, path: &str, content: &str) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(PathBuf::from(path), content.to_string());
    }

    /// Another program writes `path`: active watches on it fire.
    pub fn external_write(&self, path: &str, content: &str) {
        let mut state = self.state.lock().unwrap();
        state
            .files
            .insert(PathBuf::from(path), content.to_string());
        for watch in &state.watches {
            if watch.path == Path::new(path) && watch.activation.is_active() {
                (watch.callback)(content.to_string());
            }
        }
    }

    /// Another program writes `path` after the host reads or writes it but
    /// before the host's watch on it is up.
    pub fn write_before_next_watch(&self, path: &str, content: &str) {
        self.state
            .lock()
            .unwrap()
            .racing
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn fail_writes_to(&self, path: &str) {
        self.state
            .lock()
            .unwrap()
            .failing
            .insert(PathBuf::from(path));
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(Path::new(path))
            .cloned()
    }

    pub fn active_watches(&self) -> Vec<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .watches
            .iter()
            .filter(|w| w.activation.is_active())
            .map(|w| w.path.clone())
            .collect()
    }

    pub fn watch_starts(&self) -> Vec<(PathBuf, usize)> {
        self.state.lock().unwrap().watch_starts.clone()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().writes.clone()
    }
}

impl FileStore for MemoryFileStore {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.writes.push(path.to_path_buf());
        state
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn watch(
        &self,
        path: &Path,
        baseline: &str,
        on_change: ChangeCallback,
    ) -> FsResult<WatchSubscription> {
        let mut state = self.state.lock().unwrap();
        if let Some(content) = state.racing.remove(path) {
            state.files.insert(path.to_path_buf(), content);
        }
        // Disk already differs from what the caller holds
        if let Some(content) = state.files.get(path) {
            if content != baseline {
                on_change(content.clone());
            }
        }

        let still_active = state
            .watches
            .iter()
            .filter(|w| w.activation.is_active())
            .count();
        state.watch_starts.push((path.to_path_buf(), still_active));

        let subscription = WatchSubscription::new(path);
        state.watches.push(WatchEntry {
            path: path.to_path_buf(),
            activation: subscription.activation(),
            callback: on_change,
        });
        Ok(subscription)
    }
}

// === Prompter ===

struct PromptState {
    answers: VecDeque<bool>,
    default_answer: bool,
    questions: Vec<String>,
    open_paths: VecDeque<PathBuf>,
    save_paths: VecDeque<PathBuf>,
    errors: Vec<(Option<WindowId>, String, String)>,
}

#[derive(Clone)]
pub struct ScriptedPrompter {
    state: Arc<Mutex<PromptState>>,
}

impl ScriptedPrompter {
    /// Answers "yes" unless scripted otherwise
    pub fn new() -> Self {
        Self::answering(true)
    }

    /// Answers "Cancel" unless scripted otherwise
    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(default_answer: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(PromptState {
                answers: VecDeque::new(),
                default_answer,
                questions: Vec::new(),
                open_paths: VecDeque::new(),
                save_paths: VecDeque::new(),
                errors: Vec::new(),
            })),
        }
    }

    /// Queue the answer to the next question
    pub fn answer(&self, yes: bool) -> &Self {
        self.state.lock().unwrap().answers.push_back(yes);
        self
    }

    /// Queue the path picked in the next open dialog
    pub fn open_with(&self, path: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .open_paths
            .push_back(PathBuf::from(path));
        self
    }

    /// Queue the path picked in the next save dialog
    pub fn save_to(&self, path: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .save_paths
            .push_back(PathBuf::from(path));
        self
    }

    /// Titles of the questions asked so far
    pub fn questions(&self) -> Vec<String> {
        self.state.lock().unwrap().questions.clone()
    }

    pub fn errors(&self) -> Vec<(Option<WindowId>, String, String)> {
        self.state.lock().unwrap().errors.clone()
    }
}

impl Default for ScriptedPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _window: WindowId, question: &Question<'_>) -> bool {
        let mut state = self.state.lock().unwrap();
        state.questions.push(question.title().to_string());
        let default_answer = state.default_answer;
        state.answers.pop_front().unwrap_or(default_answer)
    }

    fn choose_open_path(&self, _window: Option<WindowId>, _filters: &[FileKind]) -> Option<PathBuf> {
        self.state.lock().unwrap().open_paths.pop_front()
    }

    fn choose_save_path(
        &self,
        _window: WindowId,
        _kind: FileKind,
        _suggested: Option<&Path>,
    ) -> Option<PathBuf> {
        self.state.lock().unwrap().save_paths.pop_front()
    }

    fn show_error(&self, window: Option<WindowId>, title: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .errors
            .push((window, title.to_string(), message.to_string()));
    }
}

// === Window toolkit ===

#[derive(Default)]
struct ToolkitState {
    created: Vec<(WindowId, Placement)>,
    shown: Vec<WindowId>,
    destroyed: Vec<WindowId>,
    titles: HashMap<WindowId, String>,
    edited: HashMap<WindowId, bool>,
}

#[derive(Clone, Default)]
pub struct RecordingToolkit {
    state: Arc<Mutex<ToolkitState>>,
}

/// Where the fake toolkit puts windows it is free to place
pub const TOOLKIT_ORIGIN: Position = Position { x: 100, y: 100 };

impl RecordingToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created(&self) -> Vec<(WindowId, Placement)> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn shown(&self) -> Vec<WindowId> {
        self.state.lock().unwrap().shown.clone()
    }

    pub fn destroyed(&self) -> Vec<WindowId> {
        self.state.lock().unwrap().destroyed.clone()
    }

    pub fn title(&self, window: WindowId) -> Option<String> {
        self.state.lock().unwrap().titles.get(&window).cloned()
    }

    pub fn edited(&self, window: WindowId) -> Option<bool> {
        self.state.lock().unwrap().edited.get(&window).copied()
    }
}

impl WindowToolkit for RecordingToolkit {
    fn create(&mut self, id: WindowId, placement: Placement) -> Position {
        self.state.lock().unwrap().created.push((id, placement));
        match placement {
            Placement::At(position) => position,
            Placement::Default => TOOLKIT_ORIGIN,
        }
    }

    fn show(&mut self, id: WindowId) {
        self.state.lock().unwrap().shown.push(id);
    }

    fn destroy(&mut self, id: WindowId) {
        self.state.lock().unwrap().destroyed.push(id);
    }

    fn set_title(&mut self, id: WindowId, title: &str) {
        self.state
            .lock()
            .unwrap()
            .titles
            .insert(id, title.to_string());
    }

    fn set_document_edited(&mut self, id: WindowId, edited: bool) {
        self.state.lock().unwrap().edited.insert(id, edited);
    }
}

// === Shell ===

#[derive(Default)]
struct ShellState {
    recent: Vec<PathBuf>,
    represented: HashMap<WindowId, Option<PathBuf>>,
    revealed: Vec<PathBuf>,
    launched: Vec<PathBuf>,
    broken: bool,
}

#[derive(Clone, Default)]
pub struct RecordingShell {
    state: Arc<Mutex<ShellState>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails, as on a platform without the integration
    pub fn broken() -> Self {
        let shell = Self::default();
        shell.state.lock().unwrap().broken = true;
        shell
    }

    pub fn recent(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().recent.clone()
    }

    pub fn represented(&self, window: WindowId) -> Option<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .represented
            .get(&window)
            .cloned()
            .flatten()
    }

    pub fn revealed(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().revealed.clone()
    }

    pub fn launched(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().launched.clone()
    }

    fn record(&self, f: impl FnOnce(&mut ShellState)) -> ShellResult {
        let mut state = self.state.lock().unwrap();
        if state.broken {
            return Err(ShellError::NotAvailable("not supported".to_string()));
        }
        f(&mut state);
        Ok(())
    }
}

impl Shell for RecordingShell {
    fn add_recent_document(&mut self, path: &Path) -> ShellResult {
        self.record(|s| s.recent.push(path.to_path_buf()))
    }

    fn set_represented_file(&mut self, window: WindowId, path: Option<&Path>) -> ShellResult {
        self.record(|s| {
            s.represented.insert(window, path.map(Path::to_path_buf));
        })
    }

    fn show_in_folder(&mut self, path: &Path) -> ShellResult {
        self.record(|s| s.revealed.push(path.to_path_buf()))
    }

    fn open_in_default_app(&mut self, path: &Path) -> ShellResult {
        self.record(|s| s.launched.push(path.to_path_buf()))
    }
}

// === Notifications ===

#[derive(Clone, Default)]
pub struct RecordingSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Event names in order, as they appear on the wire
    pub fn names(&self) -> Vec<String> {
        self.all()
            .iter()
            .map(|n| {
                let json: serde_json::Value = serde_json::from_str(&n.to_json()).unwrap();
                json["event"].as_str().unwrap_or_default().to_string()
            })
            .collect()
    }

    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
