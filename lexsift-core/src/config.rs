use crate::types::DocumentType;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional classifier configuration, loaded from YAML.
///
/// The label set is closed, so configuration cannot introduce new
/// document types; it can only append extra patterns to the built-in
/// rules. Built-in patterns always stay first within each rule and the
/// rule scan order is fixed. Entries keyed by `unknown` are ignored;
/// Unknown is the fallthrough, not a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Extra patterns per document type, e.g.
    ///
    /// ```yaml
    /// extra_patterns:
    ///   certificate_of_incorporation:
    ///     - 'CERTIFICATE\s+OF\s+FORMATION'
    /// ```
    #[serde(default)]
    pub extra_patterns: HashMap<DocumentType, Vec<String>>,
}

impl ClassifierConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn extra_patterns_for(&self, doc_type: DocumentType) -> &[String] {
        self.extra_patterns
            .get(&doc_type)
            .map(|patterns| patterns.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extra_patterns_yaml() {
        let yaml = r"
extra_patterns:
  certificate_of_incorporation:
    - 'CERTIFICATE\s+OF\s+FORMATION'
";
        let config: ClassifierConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.extra_patterns_for(DocumentType::CertificateOfIncorporation),
            [r"CERTIFICATE\s+OF\s+FORMATION".to_string()]
        );
        assert!(config
            .extra_patterns_for(DocumentType::StockPurchaseAgreement)
            .is_empty());
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: ClassifierConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.extra_patterns.is_empty());
    }
}
