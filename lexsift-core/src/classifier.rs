//! Document type classification
//!
//! A prioritized rule table maps text patterns to document types. The
//! table is scanned top-to-bottom and the first pattern that matches
//! anywhere in the normalized text wins. There is no scoring and no
//! longest-match preference, so pattern precision is the only defense
//! against false positives.

use crate::config::ClassifierConfig;
use crate::types::DocumentType;
use anyhow::Result;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Fold input to uppercase before matching.
///
/// The patterns are written in uppercase and also compiled
/// case-insensitively; both layers are part of the matching contract.
/// Nothing else is touched: whitespace runs survive normalization and
/// are absorbed by the `\s+` tokens in the patterns instead.
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
}

/// One rule: a document type and the patterns that assign it.
/// Patterns are alternative sufficient conditions: any single match
/// assigns the rule's type.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub document_type: DocumentType,
    pub patterns: Vec<Regex>,
}

impl ClassificationRule {
    fn matches(&self, normalized: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(normalized))
    }
}

// The built-in rule table, compiled once per process. Order matters:
// a document matching patterns from several rules is assigned the
// earliest rule's type.
//
// All word gaps use \s+ so phrases still match when extraction joins
// words with newlines or tabs instead of spaces.
static RULE_TABLE: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
    vec![
        ClassificationRule {
            document_type: DocumentType::StockPurchaseAgreement,
            patterns: vec![
                compile_builtin(r"SERIES\s+[A-Z]\s+PREFERRED\s+STOCK\s+PURCHASE\s+AGREEMENT"),
                // The bare phrase must open a recital: "... AGREEMENT THIS
                // AGREEMENT is made ..." or the parenthesized defined-term
                // form '... AGREEMENT (this "Agreement") ...'. It also
                // appears merely referenced inside other agreements' body
                // text, which must not match.
                compile_builtin(r"STOCK\s+PURCHASE\s+AGREEMENT\s+\(?(?:THIS|THIS\s+AGREEMENT)"),
            ],
        },
        ClassificationRule {
            document_type: DocumentType::InvestorsRightsAgreement,
            patterns: vec![
                // Source documents carry either the ASCII apostrophe or the
                // typographic U+2019 one.
                compile_builtin(r"INVESTORS['\u{2019}]\s+RIGHTS\s+AGREEMENT"),
                compile_builtin(r"AMENDED\s+AND\s+RESTATED\s+INVESTORS['\u{2019}]\s+RIGHTS\s+AGREEMENT"),
                compile_builtin(r"THIS\s+INVESTORS['\u{2019}]\s+RIGHTS\s+AGREEMENT\s+IS\s+MADE"),
            ],
        },
        ClassificationRule {
            document_type: DocumentType::CertificateOfIncorporation,
            patterns: vec![
                compile_builtin(r"CERTIFICATE\s+OF\s+INCORPORATION"),
                compile_builtin(r"AMENDED\s+AND\s+RESTATED\s+CERTIFICATE\s+OF\s+INCORPORATION"),
                // Some filings prefix the corporate name and state line.
                compile_builtin(r"[A-Z\s]+CORPORATION\s+CERTIFICATE\s+OF\s+INCORPORATION"),
            ],
        },
    ]
});

fn compile_builtin(pattern: &str) -> Regex {
    // Built-in patterns are fixed literals; a failure here is a bug in
    // this file, not a runtime condition.
    compile_pattern(pattern).unwrap()
}

/// Compile a single pattern with search-anywhere, case-insensitive
/// semantics. Used for both built-in and config-supplied patterns.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Maps extracted document text to a [`DocumentType`].
///
/// Stateless apart from the read-only rule table; a single classifier
/// can serve any number of threads concurrently, and classifying the
/// same text twice always yields the same type.
pub struct DocumentClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentClassifier {
    /// Classifier over the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: RULE_TABLE.clone(),
        }
    }

    /// Classifier with config-supplied patterns appended to the built-in
    /// rules. The built-ins always stay first within each rule and rule
    /// order never changes, so extra patterns can widen a category but
    /// never override the table's tie-break behavior.
    pub fn with_config(config: &ClassifierConfig) -> Result<Self> {
        let mut rules = RULE_TABLE.clone();
        for rule in &mut rules {
            let doc_type = rule.document_type;
            for pattern_str in config.extra_patterns_for(doc_type) {
                let compiled = compile_pattern(pattern_str)
                    .map_err(|e| anyhow::anyhow!("invalid pattern for {doc_type:?}: {e}"))?;
                rule.patterns.push(compiled);
            }
        }
        Ok(Self { rules })
    }

    /// Classify extracted text. Total over all inputs: empty or
    /// unmatched text yields [`DocumentType::Unknown`], never an error.
    pub fn classify(&self, text: &str) -> DocumentType {
        let normalized = normalize(text);

        for rule in &self.rules {
            if rule.matches(&normalized) {
                return rule.document_type;
            }
        }

        DocumentType::Unknown
    }

    /// The active rule table, built-ins first. Read-only view for
    /// diagnostics.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }
}
