//! Terminal UI
//!
//! Stands in for the per-window UI process when the host runs in a
//! terminal. It mirrors each window's text from the notifications it
//! receives, reports windows ready as soon as they exist, and answers save
//! requests with the buffered markdown or its rendered HTML.

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use pulldown_cmark::{Options, Parser};

use crate::application::{HostEvent, UiRequest};
use crate::domain::ports::{Notification, NotificationSink};
use crate::domain::value_objects::{SaveKind, WindowId};

pub struct TerminalUi {
    inner: Arc<dyn NotificationSink>,
    events: Mutex<Sender<HostEvent>>,
    buffers: Mutex<HashMap<WindowId, String>>,
}

impl TerminalUi {
    /// Forward every notification to `inner` after handling it.
    pub fn new(inner: Arc<dyn NotificationSink>, events: Sender<HostEvent>) -> Self {
        Self {
            inner,
            events: Mutex::new(events),
            buffers: Mutex::new(HashMap::new()),
        }
    }

    /// Text the window currently shows
    pub fn buffer(&self, window: WindowId) -> Option<String> {
        self.buffers
            .lock()
            .ok()
            .and_then(|buffers| buffers.get(&window).cloned())
    }

    /// Record text typed into the window
    pub fn set_buffer(&self, window: WindowId, content: &str) {
        if let Ok(mut buffers) = self.buffers.lock() {
            buffers.insert(window, content.to_string());
        }
    }

    fn post(&self, event: HostEvent) {
        if let Ok(events) = self.events.lock() {
            if events.send(event).is_err() {
                log::debug!("host queue closed");
            }
        }
    }
}

/// Render markdown the way the preview pane does
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

impl NotificationSink for TerminalUi {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::WindowCreated { window } => {
                self.set_buffer(*window, "");
                self.post(HostEvent::WindowReady(*window));
            }
            Notification::FileOpened {
                window, content, ..
            }
            | Notification::FileChanged {
                window, content, ..
            }
            | Notification::ContentReverted { window, content } => {
                self.set_buffer(*window, content);
            }
            Notification::SaveRequested { window, kind } => {
                let content = self.buffer(*window).unwrap_or_default();
                let request = match kind {
                    SaveKind::Markdown => UiRequest::SaveMarkdown {
                        window: *window,
                        content,
                    },
                    SaveKind::Html => UiRequest::SaveHtml {
                        window: *window,
                        html: render_html(&content),
                    },
                };
                self.post(request.into());
            }
            Notification::WindowClosed { window } => {
                if let Ok(mut buffers) = self.buffers.lock() {
                    buffers.remove(window);
                }
            }
            _ => {}
        }
        self.inner.notify(notification);
    }
}
