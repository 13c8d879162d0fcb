//! Fire Sale - markdown editor host
//!
//! Usage: firesale [OPTIONS] [FILES]...
//!
//! Each file opens in its own window; with no files a single empty window
//! is opened. Window commands are read from stdin (`help` lists them).

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Parser;

use firesale::application::HostEvent;
use firesale::config::{Config, Verbosity};
use firesale::presentation::{create_application, create_prompter, repl, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(),
    };
    let config = cli.apply(config);

    init_logging(config.output.verbosity);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    let mut host = create_application(&config, create_prompter(cli.yes));

    // First Ctrl+C asks to quit (unsaved windows still prompt); a second one
    // exits immediately.
    let sender = host.app.sender();
    let interrupted = AtomicBool::new(false);
    ctrlc::set_handler(move || {
        if interrupted.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
        eprintln!("\nQuitting (press Enter, or Ctrl+C again to force)");
        let _ = sender.send(HostEvent::Quit);
    })
    .context("failed to set Ctrl+C handler")?;

    log::info!(
        "starting ({} window(s), resident: {})",
        cli.files.len().max(1),
        config.app.resident
    );
    host.app.start(&cli.files);
    repl::run(&mut host).context("reading commands")?;
    Ok(())
}

fn init_logging(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
