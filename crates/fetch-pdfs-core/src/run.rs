//! One run of the pipeline: scan, extract, resolve each URL, optionally rewrite.
//!
//! Human-readable status lines go to the caller's writer (stdout for the CLI);
//! structured diagnostics go through `tracing`.

use crate::config::FetchConfig;
use crate::extract::{self, SourceSet};
use crate::fetch;
use crate::rewrite;
use crate::scan;
use crate::url_model;
use crate::validate::looks_like_pdf;
use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Inputs for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Site root: scanned for HTML and parent of the asset directory.
    pub root: PathBuf,
    /// Rewrite HTML links to local paths after downloading.
    pub rewrite: bool,
    pub config: FetchConfig,
}

/// How a URL was resolved to a local file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A valid PDF was already on disk; no request made.
    Cached,
    /// Downloaded during this run.
    Downloaded,
}

/// A URL that could not be resolved.
#[derive(Debug, Clone)]
pub struct Failure {
    pub url: String,
    pub error: String,
    /// HTML files referencing the URL.
    pub sources: BTreeSet<PathBuf>,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Number of distinct PDF URLs found.
    pub found: usize,
    /// URL → public local path, for every resolved URL.
    pub resolved: BTreeMap<String, String>,
    /// How each resolved URL was obtained.
    pub resolutions: BTreeMap<String, Resolution>,
    /// Failed URLs in processing order.
    pub failures: Vec<Failure>,
    /// HTML files rewritten (rewrite mode only).
    pub rewritten: Vec<PathBuf>,
}

impl RunReport {
    /// 1 if any URL failed, else 0.
    pub fn exit_code(&self) -> i32 {
        if self.failures.is_empty() {
            0
        } else {
            1
        }
    }
}

/// Path relative to `root` for display; falls back to the full path.
fn rel<'a>(root: &Path, path: &'a Path) -> std::path::Display<'a> {
    path.strip_prefix(root).unwrap_or(path).display()
}

/// Runs the whole pipeline, writing status lines to `out`.
///
/// Per-URL failures are collected in the report. Scan, read and rewrite
/// errors abort the run.
pub fn run(opts: &RunOptions, out: &mut dyn Write) -> Result<RunReport> {
    let root = opts.root.as_path();
    let cfg = &opts.config;
    let out_dir = root.join(&cfg.asset_dir);
    let http = cfg.http_options();

    let html_files = scan::html_files(root)?;
    let sources: SourceSet = extract::collect_sources(&html_files)?;
    tracing::info!(
        files = html_files.len(),
        urls = sources.len(),
        root = %root.display(),
        "scan complete"
    );

    let mut report = RunReport {
        found: sources.len(),
        ..RunReport::default()
    };

    if sources.is_empty() {
        writeln!(out, "No external PDF links found.")?;
        return Ok(report);
    }

    writeln!(out, "Found {} external PDF link(s).", sources.len())?;

    let names = url_model::assign_filenames(sources.keys().map(String::as_str));

    for (url, referenced_in) in &sources {
        let name = names[url].as_str();
        let dest = out_dir.join(name);
        let local = cfg.public_path(name);

        if dest.exists() {
            if looks_like_pdf(&dest) {
                tracing::debug!(url = %url, dest = %dest.display(), "reusing cached PDF");
                report.resolved.insert(url.clone(), local);
                report.resolutions.insert(url.clone(), Resolution::Cached);
                continue;
            }
            writeln!(
                out,
                "Existing file does not look like a PDF, re-downloading: {}",
                rel(root, &dest)
            )?;
        }

        writeln!(out, "Downloading: {}", url)?;
        match fetch::download_pdf(url, &dest, &http) {
            Ok(_) => {
                writeln!(out, "  Saved: {}", rel(root, &dest))?;
                report.resolved.insert(url.clone(), local);
                report.resolutions.insert(url.clone(), Resolution::Downloaded);
            }
            Err(e) => {
                let listed = referenced_in
                    .iter()
                    .map(|p| rel(root, p).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(out, "  ERROR: {}\n  Referenced in: {}", e, listed)?;
                tracing::warn!(url = %url, error = %e, "download failed");
                report.failures.push(Failure {
                    url: url.clone(),
                    error: e.to_string(),
                    sources: referenced_in.clone(),
                });
            }
        }
    }

    if opts.rewrite && !report.resolved.is_empty() {
        for path in &html_files {
            if rewrite::rewrite_file(path, &report.resolved)? {
                writeln!(out, "Rewrote links in: {}", rel(root, path))?;
                report.rewritten.push(path.clone());
            }
        }
    }

    if !report.failures.is_empty() {
        writeln!(
            out,
            "\nSome PDFs could not be downloaded (leaving those links as external):"
        )?;
        for failure in &report.failures {
            writeln!(out, "- {}", failure.url)?;
        }
    }

    writeln!(out, "Done.")?;
    tracing::info!(
        found = report.found,
        resolved = report.resolved.len(),
        failed = report.failures.len(),
        rewritten = report.rewritten.len(),
        "run finished"
    );
    Ok(report)
}
