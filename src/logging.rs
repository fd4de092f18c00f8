//! Log initialisation.
//!
//! The TUI owns stdout, so records go to a file. The filter comes from
//! `COINPAGE_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "COINPAGE_LOG";

/// Filter used when no environment variable is set.
pub const DEFAULT_FILTER: &str = "info";

/// Resolve the filter directive from an arbitrary variable lookup.
pub fn filter_directive<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |v: &String| !v.trim().is_empty();
    lookup(ENV_LOG_FILTER)
        .filter(non_blank)
        .or_else(|| lookup("RUST_LOG").filter(non_blank))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    let directive = filter_directive(|key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {}", e))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directive,
        "Logging initialised"
    );
    Ok(())
}
