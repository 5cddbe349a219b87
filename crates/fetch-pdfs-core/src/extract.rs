//! Lexical PDF link extraction.
//!
//! Matching is a plain regex over the file text, not an HTML parse: links in
//! attributes, text and comments are all found. A match cannot cross whitespace
//! or quotes, so a URL containing a literal space is never extracted.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// URL → set of HTML files that reference it. Iterates in sorted URL order.
pub type SourceSet = BTreeMap<String, BTreeSet<PathBuf>>;

fn pdf_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)https?://[^\s"']+?\.pdf"#).expect("PDF URL pattern is valid")
    })
}

/// All PDF URLs in `text`, in order of appearance, duplicates included.
pub fn pdf_urls(text: &str) -> Vec<&str> {
    pdf_url_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// Reads `path` as UTF-8, replacing invalid sequences with U+FFFD.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Reads every file and records which files reference each PDF URL.
pub fn collect_sources(files: &[PathBuf]) -> Result<SourceSet> {
    let mut sources = SourceSet::new();
    for path in files {
        let text = read_lossy(path)?;
        for url in pdf_urls(&text) {
            sources
                .entry(url.to_string())
                .or_default()
                .insert(path.clone());
        }
    }
    Ok(sources)
}
