use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Route tracing output to a log file inside the data directory.
///
/// The TUI owns the terminal, so stderr is not a usable sink while the
/// alternate screen is active. Safe to call multiple times; subsequent calls
/// are no-ops for the global subscriber.
pub fn init_file(path: &Path) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
