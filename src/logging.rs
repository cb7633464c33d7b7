//! Logging setup for applications embedding the client.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! embedder's call. These helpers cover the two usual destinations: a log
//! file under the XDG state dir, or stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,recurl=debug"))
}

/// Where `init_file_logging` writes: `~/.local/state/recurl/recurl.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("recurl")?;
    Ok(xdg_dirs.get_state_home().join("recurl.log"))
}

/// Initialize structured logging to the file at [`log_path`], appending
/// across runs. Returns Err when the state dir is unwritable so the caller
/// can fall back to [`init_stderr_logging`].
pub fn init_file_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    init_with_file(&path)
}

fn init_with_file(path: &Path) -> Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging to {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file).
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
