//! CLI for fetch-pdfs.

use anyhow::{Context, Result};
use clap::Parser;
use fetch_pdfs_core::config;
use fetch_pdfs_core::run::{run, RunOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Download externally hosted PDFs linked from a static site into assets/pdf.
#[derive(Debug, Parser)]
#[command(name = "fetch_pdfs")]
#[command(about = "Fetch external PDF links into assets/pdf", long_about = None)]
pub struct Cli {
    /// Rewrite HTML links to local /assets/pdf/... after downloading.
    #[arg(long)]
    pub rewrite: bool,

    /// Site root to scan for .html files; assets are written under it.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// TOML config file (default: $XDG_CONFIG_HOME/fetch-pdfs/config.toml if present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log request and cache details (to the log file, or stderr if unavailable).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the pipeline and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        let cfg = config::load(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("site root {}", self.root.display()))?;

        let opts = RunOptions {
            root,
            rewrite: self.rewrite,
            config: cfg,
        };
        let mut stdout = io::stdout().lock();
        let report = run(&opts, &mut stdout)?;
        stdout.flush()?;
        Ok(report.exit_code())
    }
}

#[cfg(test)]
mod tests;
