//! Per-URL fetch error.

/// Why a single PDF URL could not be resolved. These never abort the run;
/// the orchestrator records them against the URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection, TLS, too many redirects).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Body did not start with the PDF signature. Nothing was written.
    #[error("downloaded content does not look like a PDF for {url} (Content-Type: {content_type})")]
    NotPdf { url: String, content_type: String },
    /// Creating the asset directory or writing the file failed.
    #[error("storage: {0:#}")]
    Storage(anyhow::Error),
}
