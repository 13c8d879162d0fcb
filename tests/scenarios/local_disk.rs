//! Scenario: Real files on disk
//!
//! Journey: the same "hello" / "hello world" session as the in-memory
//! scenarios, with the local file store and a real `notify` watcher.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use firesale::application::{
    ChangeOutcome, HostEvent, SyncController, SyncOptions, WindowRegistry,
};
use firesale::config::WindowConfig;
use firesale::domain::entities::SyncState;
use firesale::infrastructure::LocalFileStore;
use tempfile::tempdir;

use crate::common::*;

#[test]
fn scenario_hello_world_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.md");

    let (tx, rx) = mpsc::channel();
    let prompter = ScriptedPrompter::new();
    let registry = WindowRegistry::new(Box::new(RecordingToolkit::new()), &WindowConfig::default());
    let mut sync = SyncController::new(
        registry,
        LocalFileStore::with_debounce(50),
        prompter.clone(),
        Box::new(RecordingShell::new()),
        Arc::new(RecordingSink::new()),
        tx,
        SyncOptions::default(),
    );

    let w = sync.create_window();
    sync.user_edits(w, "hello").unwrap();
    prompter.save_to(path.to_str().unwrap());
    sync.save_markdown(w, "hello").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    assert_eq!(sync.document(w).unwrap().state(), SyncState::Clean);
    assert!(sync.has_watch(w));

    // Let the watcher settle before the other program writes
    std::thread::sleep(Duration::from_millis(200));
    std::fs::write(&path, "hello world").unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut reloaded = false;
    while !reloaded && Instant::now() < deadline {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(HostEvent::FileChanged {
                window,
                generation,
                content,
            }) => {
                let outcome = sync.external_change(window, generation, content).unwrap();
                reloaded = outcome == ChangeOutcome::Reloaded;
            }
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    assert!(reloaded, "no change event within 5s");
    let doc = sync.document(w).unwrap();
    assert_eq!(doc.last_saved_content(), "hello world");
    assert!(!doc.is_edited());

    sync.close_window(w).unwrap();
    assert_eq!(sync.watch_count(), 0);
}

#[test]
fn scenario_open_missing_file_on_disk() {
    let dir = tempdir().unwrap();
    let (tx, _rx) = mpsc::channel();
    let registry = WindowRegistry::new(Box::new(RecordingToolkit::new()), &WindowConfig::default());
    let mut sync = SyncController::new(
        registry,
        LocalFileStore::new(),
        ScriptedPrompter::new(),
        Box::new(RecordingShell::new()),
        Arc::new(RecordingSink::new()),
        tx,
        SyncOptions::default(),
    );
    let w = sync.create_window();

    let err = sync.open_file(w, dir.path().join("missing.md")).unwrap_err();

    assert!(matches!(err, firesale::FireSaleError::Io { .. }));
    assert_eq!(sync.document(w).unwrap().state(), SyncState::Unbound);
}
