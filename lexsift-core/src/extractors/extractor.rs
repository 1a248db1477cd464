// Extractor abstraction for document text
//
// This module defines the boundary between document parsing (file bytes
// -> plain text) and classification (text -> document type). The trait
// allows different format backends behind a consistent interface.

use crate::types::DocumentFormat;
use std::path::Path;
use thiserror::Error;

/// Failure modes of text extraction. These never surface to end users
/// as hard failures: the pipeline classifies whatever text was
/// salvaged (possibly none) and reports Unknown instead of aborting.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("document is not a readable archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// TextExtractor trait - converts document bytes to plain text
///
/// Implementations handle one binary format each. The returned string
/// is the concatenation of the document's page/paragraph text with a
/// single separating space, matching what downstream pattern matching
/// expects.
pub trait TextExtractor {
    /// Extract plain text from raw document bytes.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// Convenience method: read a file and extract from its bytes.
    fn extract_file(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path)?;
        self.extract(&bytes)
    }

    /// Get extractor name for debugging/logging
    fn name(&self) -> &str;

    /// Check if this extractor handles the given format
    fn supports(&self, format: DocumentFormat) -> bool;
}
