//! Text extraction from binary document formats
//!
//! Extractors turn a document file into one plain text string for the
//! classifier. The contract is deliberately thin: text may be empty
//! (scanned PDF with no OCR layer) and may contain extraction artifacts
//! such as words joined by newlines; the classifier's patterns absorb
//! those. Everything downstream of this module is format-agnostic.
//!
//! ```text
//! Document (PDF, DOCX)
//!     ↓
//! [Format-specific TextExtractor]
//!     ↓
//! String (page/paragraph text, space-joined)
//!     ↓
//! [DocumentClassifier]
//! ```

pub mod extractor;
pub mod pdf;
pub mod word;

// Re-export main types
pub use extractor::{ExtractError, TextExtractor};
pub use pdf::PdfExtractor;
pub use word::WordExtractor;
