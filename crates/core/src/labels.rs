//! Label codec: the bidirectional mapping between annotation label strings
//! and the integer codes stored in the database.
//!
//! The set is loaded once from configuration at startup and never mutated,
//! so unsynchronized concurrent reads are safe.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::types::LabelCode;

/// Ordered, immutable set of annotation labels.
///
/// Codes are dense and 0-based, assigned by declaration order. `encode` and
/// `decode` are total only over the configured set; anything outside it is
/// an [`CoreError::UnknownLabel`] / [`CoreError::UnknownCode`] error, never
/// a silent default.
#[derive(Debug, Clone)]
pub struct LabelSet {
    labels: Vec<String>,
    codes: HashMap<String, LabelCode>,
}

impl LabelSet {
    /// Build a label set from an ordered list of names.
    ///
    /// Rejects empty lists, blank names, and duplicates; any of those would
    /// break the string/code bijection.
    pub fn new(labels: Vec<String>) -> Result<Self, CoreError> {
        if labels.is_empty() {
            return Err(CoreError::Validation(
                "label set must not be empty".to_string(),
            ));
        }

        let mut codes = HashMap::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "blank label name at position {index}"
                )));
            }
            if codes.insert(label.clone(), index as LabelCode).is_some() {
                return Err(CoreError::Validation(format!(
                    "duplicate label name: {label}"
                )));
            }
        }

        Ok(Self { labels, codes })
    }

    /// Parse a comma-separated label list (the `LABELS` configuration value).
    ///
    /// Whitespace around names is trimmed; empty segments (e.g. a trailing
    /// comma) are dropped before validation.
    pub fn from_csv(csv: &str) -> Result<Self, CoreError> {
        Self::new(
            csv.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Map a label string to its stored code.
    pub fn encode(&self, label: &str) -> Result<LabelCode, CoreError> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| CoreError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Map a stored code back to its label string.
    pub fn decode(&self, code: LabelCode) -> Result<&str, CoreError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.labels.get(index))
            .map(String::as_str)
            .ok_or(CoreError::UnknownCode { code })
    }

    /// Ordered label names, for rendering the option list.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of configured labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn set(names: &[&str]) -> LabelSet {
        LabelSet::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn codes_are_dense_and_declaration_ordered() {
        let labels = set(&["pos", "neg", "neutral"]);
        assert_eq!(labels.encode("pos").unwrap(), 0);
        assert_eq!(labels.encode("neg").unwrap(), 1);
        assert_eq!(labels.encode("neutral").unwrap(), 2);
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_matches!(LabelSet::new(vec![]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = LabelSet::new(vec!["pos".to_string(), "  ".to_string()]);
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let result = LabelSet::new(vec!["pos".to_string(), "pos".to_string()]);
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn from_csv_trims_and_drops_empty_segments() {
        let labels = LabelSet::from_csv(" pos , neg ,").unwrap();
        assert_eq!(labels.labels(), &["pos".to_string(), "neg".to_string()]);
    }

    // -- round trips ---------------------------------------------------------

    #[test]
    fn decode_of_encode_is_identity_for_every_label() {
        let labels = set(&["pos", "neg", "neutral"]);
        for name in labels.labels().to_vec() {
            let code = labels.encode(&name).unwrap();
            assert_eq!(labels.decode(code).unwrap(), name);
        }
    }

    #[test]
    fn encode_of_decode_is_identity_for_every_code() {
        let labels = set(&["pos", "neg", "neutral"]);
        for code in 0..labels.len() as LabelCode {
            let name = labels.decode(code).unwrap().to_string();
            assert_eq!(labels.encode(&name).unwrap(), code);
        }
    }

    // -- out-of-set inputs ---------------------------------------------------

    #[test]
    fn encode_rejects_unknown_label() {
        let labels = set(&["pos", "neg"]);
        assert_matches!(
            labels.encode("maybe"),
            Err(CoreError::UnknownLabel { label }) if label == "maybe"
        );
    }

    #[test]
    fn decode_rejects_out_of_range_codes() {
        let labels = set(&["pos", "neg"]);
        assert_matches!(labels.decode(2), Err(CoreError::UnknownCode { code: 2 }));
        assert_matches!(labels.decode(-1), Err(CoreError::UnknownCode { code: -1 }));
    }
}
