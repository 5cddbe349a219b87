//! URL modeling and asset filename derivation.
//!
//! Derives a deterministic local filename for each PDF URL and keeps names
//! unique across a run.

mod path;
mod sanitize;

pub use path::{filename_from_url_path, url_path};
pub use sanitize::{has_pdf_extension, sanitize_asset_name};

use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};

/// Default filename when the URL path yields nothing usable.
pub const DEFAULT_FILENAME: &str = "document.pdf";

/// Hex characters of the URL hash appended to a colliding name.
const HASH_SUFFIX_LEN: usize = 10;

/// Derives the local asset filename for `url`.
///
/// Takes the last segment of the percent-decoded URL path, turns spaces into
/// `-`, drops everything outside `[A-Za-z0-9._-]` and ensures a `.pdf` suffix.
///
/// # Examples
///
/// - `filename_from_url("https://x.test/a.pdf")` → `"a.pdf"`
/// - `filename_from_url("https://x.test/docs/report%20final.PDF")` → `"report-final.PDF"`
/// - `filename_from_url("https://x.test/")` → `"document.pdf"`
pub fn filename_from_url(url: &str) -> String {
    let raw = filename_from_url_path(url).unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    let mut name = sanitize_asset_name(&raw);
    if !has_pdf_extension(&name) {
        name.push_str(".pdf");
    }
    if name.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        name
    }
}

/// First ten hex chars of SHA-256 over the URL text.
pub fn url_hash_suffix(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(HASH_SUFFIX_LEN);
    hex
}

/// `name` with `-<suffix>` inserted before its `.pdf` extension.
fn with_suffix(name: &str, suffix: &str) -> String {
    let stem = &name[..name.len() - ".pdf".len()];
    let ext = &name[name.len() - ".pdf".len()..];
    format!("{}-{}{}", stem, suffix, ext)
}

/// Assigns a unique filename to every URL.
///
/// A URL whose derived name is shared with no other URL keeps the plain name.
/// When several URLs derive the same name, every one of them gets its URL hash
/// appended (e.g. `a-1f3c9e0b2d.pdf`) and none keeps the plain name, so a URL
/// added later can never inherit an asset downloaded for a different URL.
pub fn assign_filenames<'a, I>(urls: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let bases: Vec<(&str, String)> = urls
        .into_iter()
        .map(|url| (url, filename_from_url(url)))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, base) in &bases {
        *counts.entry(base.as_str()).or_insert(0) += 1;
    }

    let mut out = BTreeMap::new();
    for (url, base) in &bases {
        let name = if counts[base.as_str()] > 1 {
            let renamed = with_suffix(base, &url_hash_suffix(url));
            tracing::warn!(url, base = %base, renamed = %renamed, "asset name collision");
            renamed
        } else {
            base.clone()
        };
        out.insert(url.to_string(), name);
    }
    out
}
