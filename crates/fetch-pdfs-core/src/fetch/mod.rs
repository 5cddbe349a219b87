//! Blocking HTTP GET of a single PDF.
//!
//! One libcurl easy handle per URL, no retries. The whole body is buffered in
//! memory and checked for the PDF signature before anything touches disk.

mod error;

pub use error::FetchError;

use crate::config::HttpOptions;
use crate::storage;
use crate::validate::has_pdf_signature;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Response of a completed GET.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// Final HTTP status after redirects.
    pub status: u32,
    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Performs a GET for `url` and buffers the body. Follows redirects.
/// Non-2xx statuses are returned as [`FetchError::Http`].
pub fn get(url: &str, http: &HttpOptions) -> Result<Fetched, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&http.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(http.max_redirections)?;
    easy.connect_timeout(http.connect_timeout)?;
    easy.timeout(http.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http(status));
    }
    let content_type = easy.content_type()?.map(str::to_string);

    Ok(Fetched {
        status,
        content_type,
        body,
    })
}

/// Downloads `url` to `dest` if the response is a PDF.
///
/// Creates `dest`'s parent directories first. When the body does not begin
/// with `%PDF-`, returns [`FetchError::NotPdf`] and leaves `dest` untouched.
/// Returns the number of bytes written.
pub fn download_pdf(url: &str, dest: &Path, http: &HttpOptions) -> Result<u64, FetchError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))
            .map_err(FetchError::Storage)?;
    }

    let fetched = get(url, http)?;
    tracing::debug!(
        url,
        status = fetched.status,
        bytes = fetched.body.len(),
        content_type = fetched.content_type.as_deref().unwrap_or(""),
        "GET complete"
    );

    if !has_pdf_signature(&fetched.body) {
        return Err(FetchError::NotPdf {
            url: url.to_string(),
            content_type: fetched.content_type.unwrap_or_default().to_lowercase(),
        });
    }

    storage::write_atomic(dest, &fetched.body).map_err(FetchError::Storage)?;
    tracing::info!(url, dest = %dest.display(), bytes = fetched.body.len(), "saved PDF");
    Ok(fetched.body.len() as u64)
}
