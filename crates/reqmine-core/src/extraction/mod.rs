pub mod pdfextract;
pub mod pdftotext;

use crate::error::ReqmineError;

/// Trait for PDF text extraction backends.
///
/// Backends return the whole document as one text stream, pages in order,
/// lines separated by `'\n'`.
pub trait PdfExtractor: Send + Sync {
    /// Extract the full text of the PDF held in `pdf_bytes`.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ReqmineError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Look up a backend by its CLI name.
pub fn backend(name: &str) -> Result<Box<dyn PdfExtractor>, ReqmineError> {
    match name {
        "pdf-extract" => Ok(Box::new(pdfextract::PdfExtractExtractor::new())),
        "pdftotext" => Ok(Box::new(pdftotext::PdftotextExtractor::new())),
        _ => Err(ReqmineError::Extraction(format!(
            "unknown backend '{}'. Available: {}",
            name,
            BACKENDS.join(", ")
        ))),
    }
}

/// Names accepted by [`backend`].
pub const BACKENDS: &[&str] = &["pdf-extract", "pdftotext"];
