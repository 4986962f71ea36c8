// 🔎 Category Classifier - aggregator category code → ClassificationRecord
//
// Pure and total: every input string yields a record, unknown codes degrade
// to the "unknown" sentinel instead of failing the ingestion pipeline.

use crate::record::ClassificationRecord;
use crate::table::{CategoryTable, TableEntry};
use crate::transaction::AggregatorTransaction;
use std::sync::LazyLock;

static TABLE: LazyLock<CategoryTable> = LazyLock::new(CategoryTable::builtin);

/// Process-wide table, built on first use
pub fn table() -> &'static CategoryTable {
    &TABLE
}

/// Classify an aggregator category code.
///
/// The code is matched exactly as given. Unknown codes return
/// [`ClassificationRecord::unknown`] with `internal_id` set to the input.
pub fn classify(code: &str) -> ClassificationRecord {
    let record = TABLE.classify(code);
    if record.is_unknown() {
        tracing::debug!(code, "unrecognized category code");
    }
    record
}

/// Exact lookup without the unknown fallback
pub fn lookup(code: &str) -> Option<&'static TableEntry> {
    TABLE.get(code)
}

/// Classify a transaction by its `category_id`; other fields are not consulted
pub fn classify_transaction(transaction: &AggregatorTransaction) -> ClassificationRecord {
    classify(&transaction.category_id)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TransactionKind;
    use crate::label::DetailedLabel;

    fn record(
        code: &str,
        physical: bool,
        kind: TransactionKind,
        short_label: &str,
        detailed_label: &str,
    ) -> ClassificationRecord {
        ClassificationRecord {
            internal_id: code.to_string(),
            is_physical_location: physical,
            transaction_kind: kind,
            short_label: short_label.to_string(),
            detailed_label: DetailedLabel::parse(detailed_label),
        }
    }

    #[test]
    fn test_known_sushi() {
        assert_eq!(
            classify("13005006"),
            record("13005006", true, TransactionKind::Charge, "food and drink", "food and drink=>restaurants=>sushi")
        );
    }

    #[test]
    fn test_known_electric_utility() {
        assert_eq!(
            classify("18068005"),
            record("18068005", false, TransactionKind::Charge, "service", "service=>utilities=>electric")
        );
    }

    #[test]
    fn test_known_payment() {
        assert_eq!(
            classify("16000000"),
            record("16000000", false, TransactionKind::Payment, "payment", "payment")
        );
    }

    #[test]
    fn test_unknown_fallback_is_exact() {
        assert_eq!(
            classify("99999999"),
            record("99999999", false, TransactionKind::Charge, "unknown", "unknown")
        );
    }

    #[test]
    fn test_total_for_odd_inputs() {
        let inputs = ["", " ", "13005006 ", " 13005006", "1300-5006", "abc", "🍣", "\n", "130050061"];

        for input in inputs {
            let result = classify(input);
            assert!(result.is_unknown(), "{:?} should be unknown", input);
            assert_eq!(result.internal_id, input);
        }
    }

    #[test]
    fn test_internal_id_echoes_every_input() {
        let known = table().iter().map(|entry| entry.code.to_string());
        let unknown = ["00000000", "x", "22018001"].into_iter().map(str::to_string);

        for code in known.chain(unknown) {
            assert_eq!(classify(&code).internal_id, code);
        }
    }

    #[test]
    fn test_every_known_entry_is_prefix_consistent() {
        for entry in table().iter() {
            let result = classify(entry.code);
            assert!(!result.is_unknown());
            assert!(result.detailed_label.starts_with_label(&result.short_label));
            assert!(result.detailed_label.joined().starts_with(&result.short_label));
        }
    }

    #[test]
    fn test_no_parent_fallback() {
        // 13005000 is known, its unlisted child is not resolved through it
        assert!(lookup("13005000").is_some());
        assert!(lookup("13005999").is_none());
        assert!(classify("13005999").is_unknown());
    }

    #[test]
    fn test_deterministic() {
        for code in ["13005043", "99999999", ""] {
            assert_eq!(classify(code), classify(code));
        }
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| classify("22016000")))
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.detailed_label, "travel=>taxi");
            assert!(!result.is_physical_location);
        }
    }

    #[test]
    fn test_classify_transaction_uses_category_id() {
        let transaction = AggregatorTransaction {
            transaction_id: "tx-1".to_string(),
            category_id: "13005043".to_string(),
            name: "Corner Coffee".to_string(),
            amount: 4.5,
            ..Default::default()
        };

        let result = classify_transaction(&transaction);
        assert_eq!(result.detailed_label, "food and drink=>restaurants=>coffee shop");
        assert!(result.is_physical_location);
    }
}
