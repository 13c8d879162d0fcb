//! Interactive command loop
//!
//! Plays the part of the menus and the editor pane. Runs on the main thread
//! so dialogs and the command prompt never compete for stdin: queued host
//! events are drained before every prompt and after every command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::{HostEvent, LoopControl, UiRequest};
use crate::domain::value_objects::{SaveKind, WindowId};

use super::factory::Host;

const HELP: &str = "\
Commands:
  new                 open an empty window
  open [PATH]         open PATH (or pick one) in the focused window
  edit TEXT           replace the focused window's text (\\n for newlines)
  append TEXT         add a line to the focused window's text
  show                print the focused window's text
  save                save markdown (asks for a path if untitled)
  export              export rendered HTML
  revert              throw away unsaved edits
  reveal              show the file in its folder
  launch              open the file in the default application
  focus ID            focus window ID
  close [ID]          close the focused window (or window ID)
  list                list windows
  wait [SECS]         handle file changes for SECS seconds (default 1)
  activate            simulate clicking the dock icon
  quit                quit";

/// One parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    New,
    Open(Option<PathBuf>),
    Edit(String),
    Append(String),
    Show,
    Save,
    Export,
    Revert,
    Reveal,
    Launch,
    Focus(WindowId),
    Close(Option<WindowId>),
    List,
    Wait(Duration),
    Activate,
    Quit,
    Help,
}

/// Parse a command line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "new" => ReplCommand::New,
        "open" if rest.is_empty() => ReplCommand::Open(None),
        "open" => ReplCommand::Open(Some(PathBuf::from(rest))),
        "edit" => ReplCommand::Edit(unescape(rest)),
        "append" => ReplCommand::Append(unescape(rest)),
        "show" => ReplCommand::Show,
        "save" => ReplCommand::Save,
        "export" => ReplCommand::Export,
        "revert" => ReplCommand::Revert,
        "reveal" => ReplCommand::Reveal,
        "launch" => ReplCommand::Launch,
        "focus" => ReplCommand::Focus(parse_window(rest)?),
        "close" if rest.is_empty() => ReplCommand::Close(None),
        "close" => ReplCommand::Close(Some(parse_window(rest)?)),
        "list" | "ls" => ReplCommand::List,
        "wait" if rest.is_empty() => ReplCommand::Wait(Duration::from_secs(1)),
        "wait" => {
            let duration = rest
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .ok_or_else(|| format!("not a number of seconds: {}", rest))?;
            ReplCommand::Wait(duration)
        }
        "activate" => ReplCommand::Activate,
        "quit" | "exit" => ReplCommand::Quit,
        "help" | "?" => ReplCommand::Help,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

fn parse_window(text: &str) -> Result<WindowId, String> {
    text.trim_start_matches('#')
        .parse::<u64>()
        .map(WindowId::new)
        .map_err(|_| format!("not a window id: {}", text))
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Run the command loop until the host exits or stdin closes.
pub fn run(host: &mut Host) -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        if host.app.run_pending() == LoopControl::Exit {
            return Ok(());
        }

        print!("{}", prompt(host));
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: quit, then stop reading whatever the answer
            host.app.handle(HostEvent::Quit);
            return Ok(());
        }

        match parse(&line) {
            Ok(Some(command)) => {
                if execute(host, command) == LoopControl::Exit {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(message) => eprintln!("{}", message),
        }
    }
}

fn prompt(host: &Host) -> String {
    match host.app.sync().focused() {
        Some(window) => format!("firesale[{}]> ", window),
        None => "firesale> ".to_string(),
    }
}

fn execute(host: &mut Host, command: ReplCommand) -> LoopControl {
    let focused = host.app.sync().focused();

    let event: HostEvent = match command {
        ReplCommand::Help => {
            println!("{}", HELP);
            return LoopControl::Continue;
        }
        ReplCommand::List => {
            list(host);
            return LoopControl::Continue;
        }
        ReplCommand::Wait(duration) => return host.app.wait(duration),
        ReplCommand::New => UiRequest::CreateWindow.into(),
        ReplCommand::Open(None) => UiRequest::OpenFromUser { window: None }.into(),
        ReplCommand::Open(Some(path)) => UiRequest::OpenFile { window: None, path }.into(),
        ReplCommand::Save => UiRequest::RequestSave {
            kind: SaveKind::Markdown,
        }
        .into(),
        ReplCommand::Export => UiRequest::RequestSave {
            kind: SaveKind::Html,
        }
        .into(),
        ReplCommand::Focus(window) => UiRequest::Focus { window }.into(),
        ReplCommand::Close(Some(window)) => UiRequest::Close { window }.into(),
        ReplCommand::Activate => HostEvent::Activate,
        ReplCommand::Quit => HostEvent::Quit,
        command => {
            let Some(window) = focused else {
                eprintln!("no window has focus (try 'new')");
                return LoopControl::Continue;
            };
            match window_request(host, window, command) {
                Some(request) => request.into(),
                None => return LoopControl::Continue,
            }
        }
    };

    if host.app.handle(event) == LoopControl::Exit {
        return LoopControl::Exit;
    }
    host.app.run_pending()
}

/// Commands that act on the focused window
fn window_request(host: &Host, window: WindowId, command: ReplCommand) -> Option<UiRequest> {
    match command {
        ReplCommand::Edit(content) => {
            host.ui.set_buffer(window, &content);
            Some(UiRequest::Edit { window, content })
        }
        ReplCommand::Append(text) => {
            let mut content = host.ui.buffer(window).unwrap_or_default();
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&text);
            host.ui.set_buffer(window, &content);
            Some(UiRequest::Edit { window, content })
        }
        ReplCommand::Show => {
            println!("{}", host.ui.buffer(window).unwrap_or_default());
            None
        }
        ReplCommand::Revert => Some(UiRequest::Revert { window }),
        ReplCommand::Reveal => Some(UiRequest::ShowInFolder { window }),
        ReplCommand::Launch => Some(UiRequest::OpenInDefaultApp { window }),
        ReplCommand::Close(None) => Some(UiRequest::Close { window }),
        _ => None,
    }
}

fn list(host: &Host) {
    let sync = host.app.sync();
    let title = &sync.options().app_title;
    if sync.registry().is_empty() {
        println!("(no windows)");
        return;
    }
    for document in sync.registry().iter() {
        let marker = if Some(document.id()) == sync.focused() {
            "*"
        } else {
            " "
        };
        println!(
            "{} {} {} [{:?}]",
            marker,
            document.id(),
            document.title(title),
            document.state()
        );
    }
}
