// 🏷️ Classification Record - normalized output of a category lookup

use crate::kind::TransactionKind;
use crate::label::DetailedLabel;
use serde::{Deserialize, Serialize};

/// Label used for both the short and detailed label of unrecognized codes
pub const UNKNOWN_LABEL: &str = "unknown";

// ============================================================================
// CLASSIFICATION RECORD
// ============================================================================

/// Normalized description of an aggregator category.
///
/// `internal_id` always echoes the code that was classified, whether or not
/// the table knew it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub internal_id: String,

    /// Category implies a real-world point of sale
    pub is_physical_location: bool,

    pub transaction_kind: TransactionKind,

    /// Top-level category name (e.g., "food and drink")
    pub short_label: String,

    /// Full path (e.g., "food and drink=>restaurants=>sushi")
    pub detailed_label: DetailedLabel,
}

impl ClassificationRecord {
    /// Sentinel for a code the table does not contain
    pub fn unknown(code: &str) -> Self {
        ClassificationRecord {
            internal_id: code.to_string(),
            is_physical_location: false,
            transaction_kind: TransactionKind::Charge,
            short_label: UNKNOWN_LABEL.to_string(),
            detailed_label: DetailedLabel::parse(UNKNOWN_LABEL),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown(&self.internal_id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel_shape() {
        let record = ClassificationRecord::unknown("99999999");

        assert_eq!(record.internal_id, "99999999");
        assert!(!record.is_physical_location);
        assert_eq!(record.transaction_kind, TransactionKind::Charge);
        assert_eq!(record.short_label, "unknown");
        assert_eq!(record.detailed_label, "unknown");
        assert!(record.is_unknown());
    }

    #[test]
    fn test_known_record_is_not_unknown() {
        let record = ClassificationRecord {
            internal_id: "16000000".to_string(),
            is_physical_location: false,
            transaction_kind: TransactionKind::Payment,
            short_label: "payment".to_string(),
            detailed_label: DetailedLabel::parse("payment"),
        };

        assert!(!record.is_unknown());
    }

    #[test]
    fn test_json_field_names() {
        let record = ClassificationRecord::unknown("1");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["internal_id"], "1");
        assert_eq!(value["is_physical_location"], false);
        assert_eq!(value["transaction_kind"], 1);
        assert_eq!(value["short_label"], "unknown");
        assert_eq!(value["detailed_label"], "unknown");
    }
}
