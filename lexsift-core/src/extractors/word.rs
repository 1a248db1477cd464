use super::extractor::{ExtractError, TextExtractor};
use crate::types::DocumentFormat;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Word document text extraction.
///
/// A `.docx` file is a zip archive whose `word/document.xml` carries the
/// body as paragraphs (`w:p`) of text runs (`w:t`). Run text is
/// concatenated per paragraph and paragraphs are joined with a single
/// space. Legacy binary `.doc` files are not zip archives, so they fail
/// the archive open and surface as an [`ExtractError::Archive`].
pub struct WordExtractor;

impl WordExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for WordExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

        let mut document_xml = String::new();
        {
            let mut entry = archive.by_name("word/document.xml")?;
            entry.read_to_string(&mut document_xml)?;
        }

        extract_paragraph_text(&document_xml)
    }

    fn name(&self) -> &str {
        "word"
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        format == DocumentFormat::Word
    }
}

/// Pull paragraph text out of a `word/document.xml` body.
fn extract_paragraph_text(document_xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(document_xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                // Every paragraph lands in the output, empty ones
                // included; the classifier tolerates whitespace runs.
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join(" "))
}
