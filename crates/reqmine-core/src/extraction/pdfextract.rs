use crate::error::ReqmineError;
use crate::extraction::PdfExtractor;

/// Pure-Rust extraction backend built on the `pdf-extract` crate.
pub struct PdfExtractExtractor;

impl PdfExtractExtractor {
    pub fn new() -> Self {
        PdfExtractExtractor
    }
}

impl Default for PdfExtractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ReqmineError> {
        pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| ReqmineError::Extraction(e.to_string()))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
