//! Scenario: Application lifecycle
//!
//! Journey: the host is launched, windows come and go, the OS asks it to
//! open files, and finally the user quits.
//!
//! Success Criteria:
//! - Windows are shown only once their content is ready
//! - The process ends with its last window unless it is resident
//! - Quitting never discards unsaved edits without asking

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use firesale::application::{HostEvent, LoopControl, UiRequest};
use firesale::domain::ports::Notification;
use firesale::domain::value_objects::{Placement, Position, SaveKind, WindowId};

use crate::common::*;

fn ui(request: UiRequest) -> HostEvent {
    HostEvent::Ui(request)
}

/// SCENARIO: launch with no files
#[test]
fn scenario_launch_opens_one_hidden_window() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);

    let ids = h.app.sync().registry().ids();
    assert_eq!(ids.len(), 1);
    assert!(h.toolkit.shown().is_empty());

    h.app.handle(HostEvent::WindowReady(ids[0]));
    assert_eq!(h.toolkit.shown(), ids);
    assert!(h.sink.names().contains(&"window-shown".to_string()));
}

/// SCENARIO: launch with files, each loads once its window is ready
#[test]
fn scenario_launch_with_files() {
    let store = MemoryFileStore::new()
        .with_file("/tmp/a.md", "A")
        .with_file("/tmp/b.md", "B");
    let mut h = AppHarness::with_store(false, store);
    h.app
        .start(&[PathBuf::from("/tmp/a.md"), PathBuf::from("/tmp/b.md")]);

    let ids = h.app.sync().registry().ids();
    assert_eq!(ids.len(), 2);
    assert!(h.app.sync().document(ids[0]).unwrap().file_path().is_none());

    h.ready_all();

    let first = h.app.sync().document(ids[0]).unwrap();
    let second = h.app.sync().document(ids[1]).unwrap();
    assert_eq!(first.file_path(), Some(Path::new("/tmp/a.md")));
    assert_eq!(second.current_content(), "B");
}

/// SCENARIO: new windows cascade from the focused one
#[test]
fn scenario_new_windows_cascade() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    h.app.handle(ui(UiRequest::CreateWindow));
    h.app.handle(ui(UiRequest::CreateWindow));

    let placements: Vec<Placement> = h.toolkit.created().into_iter().map(|(_, p)| p).collect();
    assert_eq!(
        placements,
        vec![
            Placement::Default,
            Placement::At(Position::new(110, 110)),
            Placement::At(Position::new(120, 120)),
        ]
    );
}

/// SCENARIO: closing the last window ends a regular process
#[test]
fn scenario_last_window_closed_exits() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    h.ready_all();
    let w = h.app.sync().registry().ids()[0];

    let control = h.app.handle(ui(UiRequest::Close { window: w }));

    assert_eq!(control, LoopControl::Exit);
    assert!(h.app.has_exited());
    assert_eq!(h.sink.all().last(), Some(&Notification::Quit));
    // Nothing is processed after exit
    assert_eq!(h.app.handle(ui(UiRequest::CreateWindow)), LoopControl::Exit);
}

/// SCENARIO: closing one of two windows keeps the process
#[test]
fn scenario_closing_one_of_two_windows_continues() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    h.app.handle(ui(UiRequest::CreateWindow));
    let ids = h.app.sync().registry().ids();

    let control = h.app.handle(ui(UiRequest::Close { window: ids[1] }));

    assert_eq!(control, LoopControl::Continue);
    assert_eq!(h.app.sync().focused(), Some(ids[0]));
}

/// SCENARIO: a resident process survives its last window
#[test]
fn scenario_resident_process_stays_alive() {
    let mut h = AppHarness::new(true);
    h.app.start(&[]);
    let w = h.app.sync().registry().ids()[0];

    assert_eq!(
        h.app.handle(ui(UiRequest::Close { window: w })),
        LoopControl::Continue
    );
    assert!(h.app.sync().registry().is_empty());

    // Clicking the dock icon brings a window back
    h.app.handle(HostEvent::Activate);
    assert_eq!(h.app.sync().registry().len(), 1);

    // With a window present activation does nothing
    h.app.handle(HostEvent::Activate);
    assert_eq!(h.app.sync().registry().len(), 1);
}

/// SCENARIO: cancelled close of the last dirty window keeps the process
#[test]
fn scenario_cancelled_close_does_not_exit() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    let w = h.app.sync().registry().ids()[0];
    h.app.handle(ui(UiRequest::Edit {
        window: w,
        content: "draft".to_string(),
    }));
    h.prompter.answer(false);

    let control = h.app.handle(ui(UiRequest::Close { window: w }));

    assert_eq!(control, LoopControl::Continue);
    assert!(h.app.sync().registry().contains(w));
}

/// SCENARIO: the OS asks to open a file
#[test]
fn scenario_open_file_request() {
    let mut h = AppHarness::with_store(true, MemoryFileStore::new().with_file("/tmp/c.md", "C"));
    h.app.handle(HostEvent::OpenFileRequest(PathBuf::from("/tmp/c.md")));

    let w = h.app.sync().registry().ids()[0];
    assert!(h.app.sync().document(w).unwrap().file_path().is_none());

    h.app.handle(HostEvent::WindowReady(w));

    assert_eq!(h.app.sync().document(w).unwrap().current_content(), "C");
}

/// SCENARIO: "Open File" with no window open
#[test]
fn scenario_open_dialog_without_windows() {
    let mut h = AppHarness::with_store(true, MemoryFileStore::new().with_file("/tmp/d.md", "D"));
    h.prompter.open_with("/tmp/d.md");

    h.app.handle(ui(UiRequest::OpenFromUser { window: None }));
    let w = h.app.sync().registry().ids()[0];
    h.app.handle(HostEvent::WindowReady(w));

    assert_eq!(
        h.app.sync().document(w).unwrap().file_path(),
        Some(Path::new("/tmp/d.md"))
    );
}

/// SCENARIO: Save accelerator routes to the focused window
#[test]
fn scenario_save_accelerator() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    let w = h.app.sync().registry().ids()[0];

    h.app.handle(ui(UiRequest::RequestSave {
        kind: SaveKind::Markdown,
    }));

    assert!(h.sink.all().contains(&Notification::SaveRequested {
        window: w,
        kind: SaveKind::Markdown,
    }));
}

/// SCENARIO: Save accelerator with every window closed
#[test]
fn scenario_save_accelerator_without_windows() {
    let mut h = AppHarness::new(true);
    h.app.start(&[]);
    let w = h.app.sync().registry().ids()[0];
    h.app.handle(ui(UiRequest::Close { window: w }));

    h.app.handle(ui(UiRequest::RequestSave {
        kind: SaveKind::Html,
    }));

    let errors = h.prompter.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, None);
    assert_eq!(errors[0].1, "Cannot Save or Export");
}

/// SCENARIO: file changes travel through the host queue
#[test]
fn scenario_file_change_through_queue() {
    let mut h = AppHarness::with_store(false, MemoryFileStore::new().with_file("/tmp/a.md", "A"));
    h.app.start(&[PathBuf::from("/tmp/a.md")]);
    h.ready_all();
    let w = h.app.sync().registry().ids()[0];

    h.store.external_write("/tmp/a.md", "A2");
    assert_eq!(h.app.run_pending(), LoopControl::Continue);

    assert_eq!(h.app.sync().document(w).unwrap().current_content(), "A2");
}

/// SCENARIO: waiting handles every change that arrives before the deadline
#[test]
fn scenario_wait_runs_until_deadline() {
    let mut h = AppHarness::with_store(false, MemoryFileStore::new().with_file("/tmp/a.md", "A"));
    h.app.start(&[PathBuf::from("/tmp/a.md")]);
    h.ready_all();
    let w = h.app.sync().registry().ids()[0];

    let store = h.store.clone();
    let writer = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        store.external_write("/tmp/a.md", "A2");
        std::thread::sleep(Duration::from_millis(150));
        store.external_write("/tmp/a.md", "A3");
    });

    let started = Instant::now();
    assert_eq!(h.app.wait(Duration::from_millis(600)), LoopControl::Continue);
    writer.join().unwrap();

    assert!(started.elapsed() >= Duration::from_millis(600));
    assert_eq!(h.app.sync().document(w).unwrap().current_content(), "A3");
}

/// SCENARIO: waiting stops early when the last window closes
#[test]
fn scenario_wait_stops_on_exit() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    h.ready_all();
    let w = h.app.sync().registry().ids()[0];
    h.app.sender().send(ui(UiRequest::Close { window: w })).unwrap();

    let started = Instant::now();
    assert_eq!(h.app.wait(Duration::from_secs(5)), LoopControl::Exit);
    assert!(started.elapsed() < Duration::from_secs(5));
}

/// SCENARIO: quitting with unsaved work, cancelled then confirmed
#[test]
fn scenario_quit_with_unsaved_work() {
    let mut h = AppHarness::with_store(false, MemoryFileStore::new().with_file("/tmp/a.md", "A"));
    h.app.start(&[PathBuf::from("/tmp/a.md")]);
    h.app.handle(ui(UiRequest::CreateWindow));
    h.ready_all();
    let ids = h.app.sync().registry().ids();
    h.app.handle(ui(UiRequest::Edit {
        window: ids[1],
        content: "unsaved".to_string(),
    }));

    h.prompter.answer(false);
    assert_eq!(h.app.handle(HostEvent::Quit), LoopControl::Continue);
    assert_eq!(h.app.sync().registry().len(), 2);
    assert!(!h.app.has_exited());

    assert_eq!(h.app.handle(HostEvent::Quit), LoopControl::Exit);
    assert!(h.app.sync().registry().is_empty());
    assert_eq!(h.app.sync().watch_count(), 0);
    assert!(h.store.active_watches().is_empty());
    assert_eq!(h.prompter.questions().len(), 2);
    assert_eq!(h.sink.all().last(), Some(&Notification::Quit));
}

/// SCENARIO: events for windows that are gone are ignored
#[test]
fn scenario_events_for_unknown_windows() {
    let mut h = AppHarness::new(false);
    h.app.start(&[]);
    let ghost = WindowId::new(99);

    assert_eq!(
        h.app.handle(ui(UiRequest::Edit {
            window: ghost,
            content: "x".to_string(),
        })),
        LoopControl::Continue
    );
    assert_eq!(h.app.handle(HostEvent::WindowReady(ghost)), LoopControl::Continue);
    assert_eq!(
        h.app.handle(ui(UiRequest::Close { window: ghost })),
        LoopControl::Continue
    );
    assert_eq!(h.app.sync().registry().len(), 1);
}
