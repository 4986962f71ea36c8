// 🗺️ Category Table - immutable exact-match map from aggregator code to record
//
// The table is data, not code: rows live in `builtin.rs` and are indexed
// once into a hash map. Codes are opaque keys; no trimming, case folding or
// prefix fallback is ever applied.

mod builtin;

pub use builtin::BUILTIN_ENTRIES;

use crate::kind::TransactionKind;
use crate::label::DetailedLabel;
use crate::record::ClassificationRecord;
use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

// ============================================================================
// TABLE ENTRY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub code: &'static str,
    pub is_physical_location: bool,
    pub kind: TransactionKind,
    pub short_label: &'static str,
    /// Joined with `=>`
    pub detailed_label: &'static str,
}

pub(crate) const fn entry(
    code: &'static str,
    is_physical_location: bool,
    kind: TransactionKind,
    short_label: &'static str,
    detailed_label: &'static str,
) -> TableEntry {
    TableEntry {
        code,
        is_physical_location,
        kind,
        short_label,
        detailed_label,
    }
}

impl TableEntry {
    pub fn to_record(&self) -> ClassificationRecord {
        ClassificationRecord {
            internal_id: self.code.to_string(),
            is_physical_location: self.is_physical_location,
            transaction_kind: self.kind,
            short_label: self.short_label.to_string(),
            detailed_label: DetailedLabel::parse(self.detailed_label),
        }
    }

    fn check(&self) -> Result<(), TableError> {
        if self.code.is_empty() {
            return Err(TableError::EmptyCode);
        }
        if !DetailedLabel::parse(self.detailed_label).starts_with_label(self.short_label) {
            return Err(TableError::LabelMismatch {
                code: self.code.to_string(),
                short_label: self.short_label.to_string(),
                detailed_label: self.detailed_label.to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("category code {0} appears more than once")]
    DuplicateCode(String),

    #[error("category entry with an empty code")]
    EmptyCode,

    #[error("category {code}: detailed label {detailed_label:?} does not start with {short_label:?}")]
    LabelMismatch {
        code: String,
        short_label: String,
        detailed_label: String,
    },
}

// ============================================================================
// CATEGORY TABLE
// ============================================================================

/// Read-only lookup table.
///
/// Built once and never mutated, so a shared reference can be used from any
/// number of threads without locking.
#[derive(Debug)]
pub struct CategoryTable {
    entries: &'static [TableEntry],
    index: HashMap<&'static str, usize>,
}

impl CategoryTable {
    /// Build a table, rejecting duplicate codes and inconsistent labels
    pub fn from_entries(entries: &'static [TableEntry]) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            entry.check()?;
            if index.insert(entry.code, position).is_some() {
                return Err(TableError::DuplicateCode(entry.code.to_string()));
            }
        }

        Ok(CategoryTable { entries, index })
    }

    /// The table shipped with this crate.
    ///
    /// A defect in the built-in rows is logged and the first row for each
    /// code wins, so lookups stay total either way.
    pub fn builtin() -> Self {
        match Self::from_entries(BUILTIN_ENTRIES) {
            Ok(table) => table,
            Err(err) => {
                tracing::error!("built-in category table is inconsistent: {}", err);
                Self::first_wins(BUILTIN_ENTRIES)
            }
        }
    }

    fn first_wins(entries: &'static [TableEntry]) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.code).or_insert(position);
        }
        CategoryTable { entries, index }
    }

    /// Exact-match lookup, no fallback
    pub fn get(&self, code: &str) -> Option<&'static TableEntry> {
        self.index.get(code).map(|&position| &self.entries[position])
    }

    /// Total lookup: unknown codes map to the unknown sentinel
    pub fn classify(&self, code: &str) -> ClassificationRecord {
        match self.get(code) {
            Some(entry) => entry.to_record(),
            None => ClassificationRecord::unknown(code),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = &'static TableEntry> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(position, entry)| self.index.get(entry.code) == Some(position))
            .map(|(_, entry)| entry)
    }

    /// All entries whose short label is exactly `label`
    pub fn with_short_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'static TableEntry> + 'a {
        self.iter().filter(move |entry| entry.short_label == label)
    }

    /// Distinct top-level labels, sorted
    pub fn short_labels(&self) -> Vec<&'static str> {
        self.iter()
            .map(|entry| entry.short_label)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// SHA-256 over the table contents, ordered by code.
    ///
    /// Two tables with the same rows share a fingerprint regardless of row
    /// order, so this names a table version.
    pub fn fingerprint(&self) -> String {
        let mut rows: Vec<&TableEntry> = self.iter().collect();
        rows.sort_by_key(|entry| entry.code);

        let mut hasher = Sha256::new();
        for entry in rows {
            hasher.update(entry.code.as_bytes());
            hasher.update(b"\t");
            hasher.update(if entry.is_physical_location { b"1" } else { b"0" });
            hasher.update(b"\t");
            hasher.update([entry.kind.code()]);
            hasher.update(b"\t");
            hasher.update(entry.short_label.as_bytes());
            hasher.update(b"\t");
            hasher.update(entry.detailed_label.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    static FORWARD: [TableEntry; 2] = [
        entry("1", true, TransactionKind::Charge, "shops", "shops=>books"),
        entry("2", false, TransactionKind::Payment, "payment", "payment"),
    ];

    static REVERSED: [TableEntry; 2] = [
        entry("2", false, TransactionKind::Payment, "payment", "payment"),
        entry("1", true, TransactionKind::Charge, "shops", "shops=>books"),
    ];

    static DUPLICATED: [TableEntry; 3] = [
        entry("1", true, TransactionKind::Charge, "shops", "shops=>books"),
        entry("2", false, TransactionKind::Payment, "payment", "payment"),
        entry("1", false, TransactionKind::Charge, "travel", "travel"),
    ];

    static MISLABELED: [TableEntry; 1] = [entry("1", true, TransactionKind::Charge, "shops", "travel=>rail")];

    static EMPTY_CODE: [TableEntry; 1] = [entry("", true, TransactionKind::Charge, "shops", "shops")];

    #[test]
    fn test_builtin_table_is_consistent() {
        let table = CategoryTable::from_entries(BUILTIN_ENTRIES).expect("built-in table must validate");
        assert_eq!(table.len(), BUILTIN_ENTRIES.len());
        assert_eq!(table.len(), 602);
    }

    #[test]
    fn test_builtin_codes_are_unique() {
        let mut seen = HashSet::new();
        for entry in BUILTIN_ENTRIES {
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
        }
    }

    #[test]
    fn test_builtin_detailed_label_starts_with_short_label() {
        for entry in BUILTIN_ENTRIES {
            let label = DetailedLabel::parse(entry.detailed_label);
            assert_eq!(label.first(), entry.short_label, "code {}", entry.code);
        }
    }

    #[test]
    fn test_builtin_only_produces_charge_and_payment() {
        for entry in BUILTIN_ENTRIES {
            assert!(
                matches!(entry.kind, TransactionKind::Charge | TransactionKind::Payment),
                "code {} has kind {}",
                entry.code,
                entry.kind
            );
        }
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err = CategoryTable::from_entries(&DUPLICATED).unwrap_err();
        assert_eq!(err, TableError::DuplicateCode("1".to_string()));
    }

    #[test]
    fn test_label_mismatch_rejected() {
        let err = CategoryTable::from_entries(&MISLABELED).unwrap_err();
        assert!(matches!(err, TableError::LabelMismatch { .. }));
    }

    #[test]
    fn test_empty_code_rejected() {
        assert_eq!(CategoryTable::from_entries(&EMPTY_CODE).unwrap_err(), TableError::EmptyCode);
    }

    #[test]
    fn test_first_wins_keeps_lookup_total() {
        let table = CategoryTable::first_wins(&DUPLICATED);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1").unwrap().short_label, "shops");
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn test_get_is_exact_match() {
        let table = CategoryTable::builtin();

        assert!(table.get("13005006").is_some());
        assert!(table.get(" 13005006").is_none());
        assert!(table.get("13005006 ").is_none());
        assert!(table.get("1300500").is_none());
        assert!(!table.contains(""));
    }

    #[test]
    fn test_classify_unknown_code() {
        let table = CategoryTable::from_entries(&FORWARD).unwrap();
        assert_eq!(table.classify("3"), ClassificationRecord::unknown("3"));
    }

    #[test]
    fn test_iter_preserves_source_order() {
        let table = CategoryTable::from_entries(&REVERSED).unwrap();
        let codes: Vec<&str> = table.iter().map(|entry| entry.code).collect();
        assert_eq!(codes, vec!["2", "1"]);
    }

    #[test]
    fn test_short_labels_and_filter() {
        let table = CategoryTable::builtin();
        let labels = table.short_labels();

        assert_eq!(labels.len(), 13);
        assert_eq!(labels.first(), Some(&"bank fees"));
        assert!(labels.contains(&"food and drink"));

        let payments: Vec<&str> = table.with_short_label("payment").map(|entry| entry.code).collect();
        assert_eq!(payments, vec!["16000000", "16001000", "16002000", "16003000"]);
    }

    #[test]
    fn test_fingerprint_ignores_row_order() {
        let forward = CategoryTable::from_entries(&FORWARD).unwrap();
        let reversed = CategoryTable::from_entries(&REVERSED).unwrap();
        let builtin = CategoryTable::builtin();

        assert_eq!(forward.fingerprint(), reversed.fingerprint());
        assert_ne!(forward.fingerprint(), builtin.fingerprint());
        assert_eq!(builtin.fingerprint().len(), 64);
        assert_eq!(builtin.fingerprint(), CategoryTable::builtin().fingerprint());
    }
}
