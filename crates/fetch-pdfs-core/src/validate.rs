//! PDF signature check for downloaded bytes and cached assets.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Leading bytes of every PDF file.
pub const PDF_SIGNATURE: &[u8; 5] = b"%PDF-";

/// True if `data` begins with `%PDF-`.
pub fn has_pdf_signature(data: &[u8]) -> bool {
    data.starts_with(PDF_SIGNATURE)
}

/// True if the file at `path` begins with `%PDF-`. Any I/O error (missing file,
/// directory, permissions) counts as "not a PDF".
pub fn looks_like_pdf(path: &Path) -> bool {
    let mut head = Vec::with_capacity(PDF_SIGNATURE.len());
    match File::open(path).and_then(|f| f.take(PDF_SIGNATURE.len() as u64).read_to_end(&mut head)) {
        Ok(_) => has_pdf_signature(&head),
        Err(e) => {
            tracing::debug!("cannot read {}: {}", path.display(), e);
            false
        }
    }
}
