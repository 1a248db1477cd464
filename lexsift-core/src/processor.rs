use crate::classifier::DocumentClassifier;
use crate::config::ClassifierConfig;
use crate::extractors::{PdfExtractor, TextExtractor, WordExtractor};
use crate::types::{ClassificationReport, DocumentFormat, DocumentType};
use anyhow::{bail, Result};
use std::path::Path;

/// Orchestrates the pipeline for one file: format detection, text
/// extraction, classification.
///
/// Extraction failure is not a pipeline failure: whatever text was
/// salvaged (usually none) goes to the classifier, and "Unknown Document
/// Type" is the valid user-visible outcome for unextractable input.
pub struct DocumentProcessor {
    pdf: PdfExtractor,
    word: WordExtractor,
    classifier: DocumentClassifier,
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor {
    /// Processor over the built-in rule table.
    pub fn new() -> Self {
        Self {
            pdf: PdfExtractor::new(),
            word: WordExtractor::new(),
            classifier: DocumentClassifier::new(),
        }
    }

    /// Processor with config-supplied patterns appended to the rules.
    pub fn with_config(config: &ClassifierConfig) -> Result<Self> {
        Ok(Self {
            pdf: PdfExtractor::new(),
            word: WordExtractor::new(),
            classifier: DocumentClassifier::with_config(config)?,
        })
    }

    /// Extract and classify one document file.
    ///
    /// Unsupported extensions are rejected before any bytes are read;
    /// read errors propagate. Extraction errors are downgraded to a
    /// warning and an empty text, per the salvage contract.
    pub fn process_file(&self, path: &Path) -> Result<ClassificationReport> {
        let format = DocumentFormat::from_path(path);
        let Some(extractor) = self.extractor_for(format) else {
            bail!(
                "unsupported file type: {} (accepted extensions: pdf, doc, docx)",
                path.display()
            );
        };

        let bytes = std::fs::read(path)?;

        let text = match extractor.extract(&bytes) {
            Ok(text) => text,
            Err(e) => {
                eprintln!(
                    "⚠️  {} extraction failed for {}: {e}; classifying salvaged text",
                    extractor.name(),
                    path.display()
                );
                String::new()
            }
        };

        let document_type = self.classifier.classify(&text);

        Ok(ClassificationReport::new(
            path.display().to_string(),
            format,
            document_type,
            text.chars().count(),
        ))
    }

    /// Classify already-extracted text directly.
    pub fn classify_text(&self, text: &str) -> DocumentType {
        self.classifier.classify(text)
    }

    fn extractor_for(&self, format: DocumentFormat) -> Option<&dyn TextExtractor> {
        let extractors: [&dyn TextExtractor; 2] = [&self.pdf, &self.word];
        extractors.into_iter().find(|e| e.supports(format))
    }
}
