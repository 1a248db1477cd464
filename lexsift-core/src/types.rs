use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ===== DOCUMENT TYPES =====
// The closed set of categories the classifier can assign, plus the
// Unknown sentinel. Declaration order is the rule table scan order:
// the first matching rule wins, so reordering variants changes
// classification outcomes for ambiguous documents.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    StockPurchaseAgreement,
    InvestorsRightsAgreement,
    CertificateOfIncorporation,
    Unknown,
}

impl DocumentType {
    /// User-visible label. These exact strings are rendered to end users
    /// and must not change, including the odd casing of the Unknown
    /// label, which predates the title-cased ones.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::StockPurchaseAgreement => "Stock Purchase Agreement",
            DocumentType::InvestorsRightsAgreement => "Investors' Rights Agreement",
            DocumentType::CertificateOfIncorporation => "Certificate of Incorporation",
            DocumentType::Unknown => "Unknown Document Type",
        }
    }

    /// All types in rule table order, Unknown last.
    pub fn all() -> [DocumentType; 4] {
        [
            DocumentType::StockPurchaseAgreement,
            DocumentType::InvestorsRightsAgreement,
            DocumentType::CertificateOfIncorporation,
            DocumentType::Unknown,
        ]
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== DOCUMENT FORMATS =====

/// Input formats the extraction layer accepts. Anything mapping to
/// Unknown is rejected before extraction is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Word,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Word,
            _ => Self::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::Unknown => "unknown",
        }
    }
}

// ===== CLASSIFICATION OUTPUT =====

/// What the pipeline hands back to the caller for one processed file.
/// Computed fresh per call; nothing here is cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// The input path as given by the caller, kept for traceability
    pub source: String,
    pub format: DocumentFormat,
    pub document_type: DocumentType,
    /// Denormalized copy of `document_type.label()` so consumers of the
    /// JSON report don't need the enum mapping
    pub label: String,
    /// Characters of text that survived extraction. Zero means the
    /// document had no extractable text (or extraction was salvaged).
    pub extracted_chars: usize,
    pub classified_at: DateTime<Utc>,
}

impl ClassificationReport {
    pub fn new(
        source: impl Into<String>,
        format: DocumentFormat,
        document_type: DocumentType,
        extracted_chars: usize,
    ) -> Self {
        Self {
            source: source.into(),
            format,
            document_type,
            label: document_type.label().to_string(),
            extracted_chars,
            classified_at: Utc::now(),
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save the report as JSON to the given path.
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
