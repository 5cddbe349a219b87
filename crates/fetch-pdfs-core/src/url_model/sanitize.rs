//! Asset filename sanitization.

/// Restricts `name` to `[A-Za-z0-9._-]`: spaces become `-`, every other
/// character outside the set is dropped.
pub fn sanitize_asset_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// True if `name` ends in `.pdf`, any case.
pub fn has_pdf_extension(name: &str) -> bool {
    name.len() >= 4
        && name.is_char_boundary(name.len() - 4)
        && name[name.len() - 4..].eq_ignore_ascii_case(".pdf")
}
