//! File-backed `tracing` setup.
//!
//! The terminal UI owns stdout and stderr, so log lines go to
//! ~/.typing-clicker/clicker.log instead. The filter comes from
//! `TYPING_CLICKER_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use crate::core::constants::{LOG_FILE_NAME, LOG_FILTER_ENV};
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, appending to `dir/clicker.log`.
pub fn init_file_logging(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}
