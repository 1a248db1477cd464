use super::extractor::{ExtractError, TextExtractor};
use crate::types::DocumentFormat;

/// PDF text extraction via the `pdf-extract` crate.
///
/// Per-page text is joined with a single space. A page with no
/// extractable text (a scanned image without an OCR layer) contributes
/// an empty string, so an image-only PDF yields whitespace-only output
/// and falls through to the Unknown classification.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
        Ok(pages.join(" "))
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        format == DocumentFormat::Pdf
    }
}
