use std::path::PathBuf;

use clap::Parser;

/// A borderless terminal to-do list with hand-rolled window chrome.
#[derive(Debug, Parser)]
#[command(name = "tuido", version, about)]
pub struct Cli {
    /// Directory for todos.json, theme.json and the log file.
    /// Defaults to the per-user data directory.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Start in dark mode, overriding the saved preference.
    #[arg(long)]
    pub dark: bool,
}
