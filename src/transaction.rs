// 🧾 Transactions - aggregator input records and their classified form
//
// Only `category_id` is consulted by the classifier. Everything else is
// pass-through data carried to storage unchanged.

use crate::classifier::classify_transaction;
use crate::label::SEPARATOR;
use crate::record::ClassificationRecord;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

// ============================================================================
// AGGREGATOR TRANSACTION (input)
// ============================================================================

/// Transaction as delivered by the upstream aggregator.
///
/// Field names follow the aggregator's JSON so records deserialize directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatorTransaction {
    #[serde(default)]
    pub transaction_id: String,

    #[serde(default)]
    pub account_id: String,

    /// Aggregator category code (e.g., "13005043")
    #[serde(default)]
    pub category_id: String,

    /// Aggregator's own hierarchical category names. A list in JSON, a single
    /// `=>`-joined column in CSV exports.
    #[serde(default, deserialize_with = "category_path", skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,

    /// Merchant name or transaction description
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub merchant_name: String,

    #[serde(default)]
    pub original_description: String,

    /// Positive when money leaves the account
    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub iso_currency_code: String,

    #[serde(default)]
    pub unofficial_currency_code: String,

    /// Posted date, YYYY-MM-DD
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub pending: bool,

    /// "online", "in store" or "other"
    #[serde(default)]
    pub payment_channel: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,
}

struct CategoryPathVisitor;

impl<'de> Visitor<'de> for CategoryPathVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of category names or a `=>`-joined string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value.is_empty() {
            return Ok(Vec::new());
        }
        Ok(value.split(SEPARATOR).map(str::to_string).collect())
    }

    // CSV fields are type-inferred, so a purely numeric name arrives as a number
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut names = Vec::new();
        while let Some(name) = seq.next_element::<String>()? {
            names.push(name);
        }
        Ok(names)
    }
}

fn category_path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    deserializer.deserialize_any(CategoryPathVisitor)
}

// ============================================================================
// CLASSIFIED TRANSACTION (output)
// ============================================================================

/// Transaction with its classification attached, ready for storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTransaction {
    #[serde(flatten)]
    pub transaction: AggregatorTransaction,

    pub classification: ClassificationRecord,
}

impl ClassifiedTransaction {
    pub fn from_transaction(transaction: AggregatorTransaction) -> Self {
        let classification = classify_transaction(&transaction);
        ClassifiedTransaction {
            transaction,
            classification,
        }
    }
}

/// Classify a batch, preserving order
pub fn classify_all(transactions: Vec<AggregatorTransaction>) -> Vec<ClassifiedTransaction> {
    transactions
        .into_iter()
        .map(ClassifiedTransaction::from_transaction)
        .collect()
}

// ============================================================================
// CSV LOADING
// ============================================================================

/// Read a CSV export whose headers match the aggregator field names.
/// Missing columns take their defaults.
pub fn load_transactions_csv<R: Read>(reader: R) -> Result<Vec<AggregatorTransaction>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut transactions = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let transaction: AggregatorTransaction =
            result.with_context(|| format!("Failed to deserialize transaction on row {}", line + 1))?;
        transactions.push(transaction);
    }

    Ok(transactions)
}

pub fn load_transactions_csv_path(path: &Path) -> Result<Vec<AggregatorTransaction>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    load_transactions_csv(file)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TransactionKind;

    const EXPORT: &str = "\
transaction_id,account_id,category_id,name,merchant_name,amount,iso_currency_code,date,pending
tx-1,acc-1,13005006,SUSHI ZEN,Sushi Zen,42.10,USD,2024-03-01,false
tx-2,acc-1,16001000,CARD PAYMENT,,-500.00,USD,2024-03-02,false
tx-3,acc-2,55555555,MYSTERY,,9.99,USD,2024-03-03,true
";

    #[test]
    fn test_load_csv_with_missing_columns() {
        let transactions = load_transactions_csv(EXPORT.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].category_id, "13005006");
        assert_eq!(transactions[0].amount, 42.10);
        assert_eq!(transactions[1].merchant_name, "");
        assert!(transactions[2].pending);
        assert_eq!(transactions[2].original_description, "");
        assert!(transactions[2].datetime.is_none());
    }

    #[test]
    fn test_load_csv_with_category_column() {
        let export = "\
transaction_id,category_id,category,amount
tx-1,13005006,Food and Drink=>Restaurants=>Sushi,1.0
tx-2,16000000,Payment,2.0
tx-3,99999999,,3.0
";
        let transactions = load_transactions_csv(export.as_bytes()).unwrap();

        assert_eq!(transactions[0].category, vec!["Food and Drink", "Restaurants", "Sushi"]);
        assert_eq!(transactions[1].category, vec!["Payment"]);
        assert!(transactions[2].category.is_empty());
        assert_eq!(transactions[0].amount, 1.0);
    }

    #[test]
    fn test_load_csv_reports_bad_row() {
        let broken = "transaction_id,category_id,amount\ntx-1,13005006,not-a-number\n";
        let err = load_transactions_csv(broken.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_classify_all_attaches_records() {
        let transactions = load_transactions_csv(EXPORT.as_bytes()).unwrap();
        let classified = classify_all(transactions);

        assert_eq!(classified[0].classification.short_label, "food and drink");
        assert_eq!(classified[1].classification.transaction_kind, TransactionKind::Payment);
        assert_eq!(classified[1].classification.detailed_label, "payment=>credit card");
        assert!(classified[2].classification.is_unknown());
        assert_eq!(classified[2].classification.internal_id, "55555555");
        assert_eq!(classified[2].transaction.name, "MYSTERY");
    }

    #[test]
    fn test_aggregator_json_passes_through() {
        let json = r#"{
            "transaction_id": "abc",
            "category_id": "22016000",
            "category": ["Travel", "Taxi"],
            "name": "Uber 063015 SF**POOL**",
            "amount": 5.4,
            "datetime": "2024-03-01T10:00:00Z",
            "some_new_field": 1
        }"#;

        let transaction: AggregatorTransaction = serde_json::from_str(json).unwrap();
        let classified = ClassifiedTransaction::from_transaction(transaction.clone());
        let value = serde_json::to_value(&classified).unwrap();

        assert_eq!(value["name"], "Uber 063015 SF**POOL**");
        assert_eq!(value["category"][1], "Taxi");
        assert_eq!(value["classification"]["detailed_label"], "travel=>taxi");
        assert_eq!(classified.transaction, transaction);
    }
}
