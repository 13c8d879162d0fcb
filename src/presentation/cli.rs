//! CLI Argument Parsing
//!
//! This module defines the command line using clap.
//!
//! ## Design Notes
//!
//! - Files on the command line behave like OS "open this file" requests
//! - Flags override the config file and `FIRESALE_*` environment variables

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, Verbosity};

/// Fire Sale - markdown editor host
#[derive(Parser, Debug)]
#[command(name = "firesale")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Type 'help' at the prompt for window commands.")]
pub struct Cli {
    /// Markdown or text files to open, one window each
    pub files: Vec<PathBuf>,

    /// Keep running after the last window closes
    #[arg(long)]
    pub resident: bool,

    /// Print notifications as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Answer every confirmation with yes
    #[arg(short, long)]
    pub yes: bool,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if self.resident {
            config.app.resident = true;
        }
        if self.json {
            config.output.json = true;
        }
        if self.verbose > 0 {
            config.output.verbosity = Verbosity::from_count(self.verbose);
        }
        config
    }
}
