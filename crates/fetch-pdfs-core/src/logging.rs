//! Diagnostic logging for a single run.
//!
//! Status lines for the user go to stdout from `run`; this is the structured
//! trail behind them (request details, cache decisions, collisions), appended
//! to one file per user under the XDG state dir.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter when `RUST_LOG` is unset: per-URL events from this crate, only
/// warnings from dependencies.
const DEFAULT_FILTER: &str = "warn,fetch_pdfs_core=info";
/// Filter with `--verbose`: adds request and cache details.
const VERBOSE_FILTER: &str = "info,fetch_pdfs_core=debug";

fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Path of the log file, `~/.local/state/fetch-pdfs/fetch-pdfs.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetch-pdfs")?;
    Ok(xdg_dirs.get_state_home().join("fetch-pdfs").join("fetch-pdfs.log"))
}

/// Appends this run's log to [`log_path`] and returns the path.
/// Errors (unwritable state dir, subscriber already set) are returned so the
/// caller can fall back to [`init_logging_stderr`].
pub fn init_logging(verbose: bool) -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::info!(args = ?std::env::args().skip(1).collect::<Vec<_>>(), "fetch_pdfs started");
    Ok(path)
}

/// Logs to stderr instead of a file. Without `--verbose` only warnings are
/// shown, so stdout status lines stay the main output.
pub fn init_logging_stderr(verbose: bool) {
    let filter = if verbose {
        env_filter(true)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
