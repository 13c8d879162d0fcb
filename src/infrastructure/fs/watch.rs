//! Single-file watcher on top of `notify`
//!
//! Watches the parent directory non-recursively (editors often save by
//! writing a temp file and renaming it over the original, which a watch on
//! the file itself would lose), debounces bursts of events, and only
//! reports content whose hash differs from the last one seen. The first
//! "last seen" is the caller's baseline, so a write that lands between the
//! caller's read and the watch start is still reported.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{ChangeCallback, FsError, FsResult, WatchActivation, WatchSubscription};
use crate::domain::value_objects::ContentHash;

/// Poll interval of the debounce loop
const TICK_MS: u64 = 25;

/// Debounce state for one watched file
pub(crate) struct DebounceState {
    pending: bool,
    last_event: Option<Instant>,
    quiet_period: Duration,
}

impl DebounceState {
    pub(crate) fn new(quiet_period: Duration) -> Self {
        Self {
            pending: false,
            last_event: None,
            quiet_period,
        }
    }

    pub(crate) fn record_event(&mut self) {
        self.pending = true;
        self.last_event = Some(Instant::now());
    }

    pub(crate) fn should_fire(&self) -> bool {
        match self.last_event {
            Some(last) => self.pending && last.elapsed() >= self.quiet_period,
            None => false,
        }
    }

    pub(crate) fn take(&mut self) -> bool {
        let was_pending = self.pending;
        self.pending = false;
        self.last_event = None;
        was_pending
    }
}

/// Start watching `path`; `on_change` runs on a background thread.
pub(crate) fn watch_file(
    path: &Path,
    baseline: &str,
    quiet_period: Duration,
    on_change: ChangeCallback,
) -> FsResult<WatchSubscription> {
    let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let parent = target
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| FsError::Other(format!("{} has no parent directory", path.display())))?;
    let file_name = target
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| FsError::Other(format!("{} is not a file path", path.display())))?;

    let (tx, rx) = channel::<()>();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()))
                {
                    let _ = tx.send(());
                }
            }
            Err(e) => log::warn!("watch error: {}", e),
        },
        Config::default(),
    )
    .map_err(|e| FsError::Other(e.to_string()))?;

    watcher
        .watch(&parent, RecursiveMode::NonRecursive)
        .map_err(|e| FsError::Other(e.to_string()))?;

    let subscription = WatchSubscription::new(path);
    let activation = subscription.activation();
    let initial = ContentHash::from_content(baseline);

    std::thread::Builder::new()
        .name("firesale-watch".to_string())
        .spawn(move || {
            run_debounce_loop(target, rx, quiet_period, initial, activation, on_change)
        })
        .map_err(FsError::Io)?;

    log::debug!("watching {} via {}", path.display(), parent.display());
    Ok(subscription.with_guard(watcher))
}

fn run_debounce_loop(
    target: PathBuf,
    rx: std::sync::mpsc::Receiver<()>,
    quiet_period: Duration,
    mut last_hash: ContentHash,
    activation: WatchActivation,
    on_change: ChangeCallback,
) {
    let mut state = DebounceState::new(quiet_period);

    // Disk already moved past the baseline before the watcher was up
    if let Ok(content) = std::fs::read_to_string(&target) {
        if ContentHash::from_content(&content) != last_hash {
            state.record_event();
        }
    }

    loop {
        match rx.recv_timeout(Duration::from_millis(TICK_MS)) {
            Ok(()) => state.record_event(),
            Err(RecvTimeoutError::Timeout) => {}
            // Watcher dropped: the subscription was cancelled
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if !activation.is_active() {
            break;
        }

        if state.should_fire() && state.take() {
            // Deleted or half-written files are picked up by the next event
            let Ok(content) = std::fs::read_to_string(&target) else {
                continue;
            };
            let hash = ContentHash::from_content(&content);
            if hash == last_hash {
                continue;
            }
            last_hash = hash;
            if activation.is_active() {
                on_change(content);
            }
        }
    }

    log::debug!("watch loop for {} stopped", target.display());
}
