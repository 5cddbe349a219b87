//! Site scanning: enumerate HTML source files under the root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns every regular file with extension `html` under `root`, recursively,
/// sorted by path. Traversal errors are fatal.
pub fn html_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("scan {}", root.display()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "html") && path.is_file() {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    tracing::debug!(count = files.len(), "scanned {}", root.display());
    Ok(files)
}
