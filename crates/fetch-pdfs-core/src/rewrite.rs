//! In-place rewriting of remote PDF URLs to local asset paths.
//!
//! Plain substring replacement, no HTML awareness.

use crate::extract::read_lossy;
use crate::storage;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Replaces every occurrence of each mapped URL with its local path.
///
/// Longer URLs are replaced first so one URL that is a prefix of another
/// cannot corrupt it.
pub fn rewrite_text(text: &str, mapping: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = mapping.iter().collect();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut out = text.to_string();
    for (url, local) in pairs {
        if out.contains(url.as_str()) {
            out = out.replace(url.as_str(), local);
        }
    }
    out
}

/// Rewrites the file at `path`. Writes only if the content changed; returns
/// whether it did.
pub fn rewrite_file(path: &Path, mapping: &BTreeMap<String, String>) -> Result<bool> {
    let original = read_lossy(path)?;
    let updated = rewrite_text(&original, mapping);
    if updated == original {
        return Ok(false);
    }
    storage::write_atomic(path, updated.as_bytes())?;
    tracing::info!("rewrote links in {}", path.display());
    Ok(true)
}
