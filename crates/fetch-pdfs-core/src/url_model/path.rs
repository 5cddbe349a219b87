//! Filename extraction from URL path.

use std::borrow::Cow;

/// Path component of `url` without query or fragment.
///
/// Uses the `url` crate when the URL parses; otherwise splits lexically so an
/// unparseable link still yields a name.
pub fn url_path(url: &str) -> Cow<'_, str> {
    if let Ok(parsed) = url::Url::parse(url) {
        return Cow::Owned(parsed.path().to_string());
    }
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
    match rest.find('/') {
        Some(i) => Cow::Borrowed(&rest[i..]),
        None => Cow::Borrowed(""),
    }
}

/// Percent-decodes the URL path and returns its last non-empty segment.
///
/// Returns `None` if the path is empty or root. Invalid UTF-8 after decoding is
/// replaced with U+FFFD.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let path = url_path(url);
    let decoded = urlencoding::decode_binary(path.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);
    let segment = decoded.split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}
