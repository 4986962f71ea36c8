// 🔁 Schema Migration - persisted classification records across schema versions
//
// Stored classifications went through three shapes:
//
//   V1  { id, description, detailed_description: "a=>b" }
//   V2  { id, physical_location, transaction_type, description,
//         detailed_description: ["a", "b"] }
//   V3  ClassificationRecord (current)
//
// The classifier only ever emits V3. Older rows are adapted here, at the
// storage boundary, and rewritten once by `migrate_store`.

use crate::classifier::table;
use crate::kind::TransactionKind;
use crate::label::DetailedLabel;
use crate::record::ClassificationRecord;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// SCHEMA VERSION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemaVersion {
    V1 = 1,
    V2 = 2,
    V3 = 3,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::V3;

    pub fn number(self) -> i64 {
        self as i64
    }

    /// Infer the shape of a persisted record from its keys
    pub fn detect(value: &Value) -> SchemaVersion {
        let has = |key: &str| value.get(key).is_some();

        if has("internal_id") && value.get("detailed_label").map_or(false, Value::is_string) {
            SchemaVersion::V3
        } else if has("physical_location")
            || has("transaction_type")
            || value.get("detailed_description").map_or(false, Value::is_array)
        {
            SchemaVersion::V2
        } else {
            SchemaVersion::V1
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("record is not a valid classification: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("record has no category id")]
    MissingId,

    #[error("record {0} has no label")]
    EmptyLabel(String),

    #[error("record {0} has a label segment containing `=>`")]
    InvalidLabel(String),

    #[error("record {id} has unknown transaction kind {code}")]
    UnknownKind { id: String, code: i64 },
}

// ============================================================================
// LEGACY RECORD
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LegacyLabel {
    Joined(String),
    Segments(Vec<String>),
}

/// Union of every persisted shape; fields absent in older versions are `None`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyRecord {
    #[serde(default, alias = "_id", alias = "internal_id")]
    id: Option<String>,

    #[serde(default, alias = "is_physical_location")]
    physical_location: Option<bool>,

    #[serde(default, alias = "transaction_kind")]
    transaction_type: Option<i64>,

    #[serde(default, alias = "short_label")]
    description: Option<String>,

    #[serde(default, alias = "detailed_label")]
    detailed_description: Option<LegacyLabel>,
}

/// Adapt any persisted shape to the current record.
///
/// Labels are kept as persisted. Flags a V1 record never had are taken from
/// the current table when the code is known, otherwise from the unknown
/// sentinel's defaults.
pub fn upgrade(legacy: LegacyRecord) -> Result<ClassificationRecord, MigrationError> {
    let id = legacy.id.filter(|id| !id.is_empty()).ok_or(MigrationError::MissingId)?;

    let detailed_label = match (legacy.detailed_description, legacy.description.as_deref()) {
        (Some(LegacyLabel::Joined(joined)), _) if !joined.is_empty() => DetailedLabel::parse(&joined),
        (Some(LegacyLabel::Segments(segments)), _) if !segments.is_empty() => {
            DetailedLabel::from_segments(segments).ok_or_else(|| MigrationError::InvalidLabel(id.clone()))?
        }
        (_, Some(description)) if !description.is_empty() => DetailedLabel::parse(description),
        _ => return Err(MigrationError::EmptyLabel(id)),
    };

    let short_label = match legacy.description {
        Some(description) if !description.is_empty() => description,
        _ => detailed_label.first().to_string(),
    };

    let current = table().get(&id);

    let transaction_kind = match legacy.transaction_type {
        Some(code) => u8::try_from(code)
            .ok()
            .and_then(TransactionKind::from_code)
            .ok_or_else(|| MigrationError::UnknownKind { id: id.clone(), code })?,
        None => current.map_or(TransactionKind::Charge, |entry| entry.kind),
    };

    let is_physical_location = legacy
        .physical_location
        .or(current.map(|entry| entry.is_physical_location))
        .unwrap_or(false);

    Ok(ClassificationRecord {
        internal_id: id,
        is_physical_location,
        transaction_kind,
        short_label,
        detailed_label,
    })
}

pub fn upgrade_value(value: Value) -> Result<ClassificationRecord, MigrationError> {
    let legacy: LegacyRecord = serde_json::from_value(value)?;
    upgrade(legacy)
}

pub fn upgrade_json(json: &str) -> Result<ClassificationRecord, MigrationError> {
    let legacy: LegacyRecord = serde_json::from_str(json)?;
    upgrade(legacy)
}

// ============================================================================
// SQLITE STORE
// ============================================================================

/// Outcome of a store migration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrationReport {
    /// Rows older than the current schema
    pub examined: usize,
    pub upgraded: usize,
    /// Upgraded rows, counted by the shape they were stored in
    pub upgraded_from: BTreeMap<SchemaVersion, usize>,
    /// (transaction_id, reason) for rows left untouched
    pub failed: Vec<(String, String)>,
}

pub fn setup_store(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS classifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            transaction_id TEXT NOT NULL UNIQUE,
            category_id TEXT NOT NULL,
            record TEXT NOT NULL,
            schema_version INTEGER,
            migrated_at TEXT
        )",
        [],
    )
    .context("Failed to create classifications table")?;

    Ok(())
}

/// Persist a classification in the current shape, replacing any earlier row
pub fn store_classification(conn: &Connection, transaction_id: &str, record: &ClassificationRecord) -> Result<()> {
    let json = serde_json::to_string(record)?;

    conn.execute(
        "INSERT INTO classifications (transaction_id, category_id, record, schema_version)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(transaction_id) DO UPDATE SET
             category_id = excluded.category_id,
             record = excluded.record,
             schema_version = excluded.schema_version",
        params![transaction_id, record.internal_id, json, SchemaVersion::CURRENT.number()],
    )
    .with_context(|| format!("Failed to store classification for {}", transaction_id))?;

    Ok(())
}

/// Read a classification, adapting older shapes on the fly
pub fn load_classification(conn: &Connection, transaction_id: &str) -> Result<Option<ClassificationRecord>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT record FROM classifications WHERE transaction_id = ?1",
            params![transaction_id],
            |row| row.get(0),
        )
        .optional()?;

    match json {
        Some(json) => {
            let record = upgrade_json(&json)
                .with_context(|| format!("Stored classification for {} is unreadable", transaction_id))?;
            Ok(Some(record))
        }
        None => Ok(None),
    }
}

/// Rewrite every row stored under an older schema in the current shape.
///
/// Rows that cannot be adapted are reported and left as they are. Running
/// it again only revisits those rows.
pub fn migrate_store(conn: &Connection) -> Result<MigrationReport> {
    let now_str = Utc::now().to_rfc3339();
    let tx = conn
        .unchecked_transaction()
        .context("Failed to begin migration transaction")?;

    let mut stmt = tx.prepare(
        "SELECT id, transaction_id, record FROM classifications
         WHERE schema_version IS NULL OR schema_version < ?1
         ORDER BY id",
    )?;

    let rows: Vec<(i64, String, String)> = stmt
        .query_map(params![SchemaVersion::CURRENT.number()], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    drop(stmt);

    let mut report = MigrationReport {
        examined: rows.len(),
        ..Default::default()
    };

    for (row_id, transaction_id, json) in rows {
        let upgraded = serde_json::from_str::<Value>(&json)
            .map_err(MigrationError::from)
            .and_then(|value| {
                let version = SchemaVersion::detect(&value);
                tracing::debug!(%transaction_id, ?version, "upgrading stored classification");
                upgrade_value(value).map(|record| (version, record))
            });

        match upgraded {
            Ok((version, record)) => {
                tx.execute(
                    "UPDATE classifications
                     SET category_id = ?1, record = ?2, schema_version = ?3, migrated_at = ?4
                     WHERE id = ?5",
                    params![
                        record.internal_id,
                        serde_json::to_string(&record)?,
                        SchemaVersion::CURRENT.number(),
                        now_str,
                        row_id
                    ],
                )?;
                report.upgraded += 1;
                *report.upgraded_from.entry(version).or_insert(0) += 1;
            }
            Err(err) => {
                tracing::warn!(%transaction_id, "cannot migrate stored classification: {}", err);
                report.failed.push((transaction_id, err.to_string()));
            }
        }
    }

    tx.commit().context("Failed to commit migration")?;

    tracing::info!(
        examined = report.examined,
        upgraded = report.upgraded,
        failed = report.failed.len(),
        "classification store migration complete"
    );

    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use serde_json::json;

    fn insert_raw(conn: &Connection, transaction_id: &str, category_id: &str, record: &Value, version: Option<i64>) {
        conn.execute(
            "INSERT INTO classifications (transaction_id, category_id, record, schema_version)
             VALUES (?1, ?2, ?3, ?4)",
            params![transaction_id, category_id, record.to_string(), version],
        )
        .unwrap();
    }

    fn test_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        setup_store(&conn).unwrap();
        conn
    }

    #[test]
    fn test_detect_versions() {
        let v1 = json!({"id": "13005006", "description": "food and drink", "detailed_description": "food and drink=>restaurants=>sushi"});
        let v2 = json!({"id": "13005006", "physical_location": true, "transaction_type": 1,
                        "description": "food and drink", "detailed_description": ["food and drink", "restaurants", "sushi"]});
        let v3 = serde_json::to_value(classify("13005006")).unwrap();

        assert_eq!(SchemaVersion::detect(&v1), SchemaVersion::V1);
        assert_eq!(SchemaVersion::detect(&v2), SchemaVersion::V2);
        assert_eq!(SchemaVersion::detect(&v3), SchemaVersion::V3);
    }

    #[test]
    fn test_upgrade_v1_fills_flags_from_table() {
        let record = upgrade_value(json!({
            "_id": "18068005",
            "description": "service",
            "detailed_description": "service=>utilities=>electric"
        }))
        .unwrap();

        assert_eq!(record, classify("18068005"));
    }

    #[test]
    fn test_upgrade_v1_unknown_code_uses_sentinel_defaults() {
        let record = upgrade_value(json!({
            "id": "77777777",
            "description": "pets",
            "detailed_description": "pets=>grooming"
        }))
        .unwrap();

        assert_eq!(record.internal_id, "77777777");
        assert!(!record.is_physical_location);
        assert_eq!(record.transaction_kind, TransactionKind::Charge);
        assert_eq!(record.short_label, "pets");
        assert_eq!(record.detailed_label, "pets=>grooming");
    }

    #[test]
    fn test_upgrade_v2_keeps_persisted_values() {
        let record = upgrade_value(json!({
            "id": "16002000",
            "physical_location": true,
            "transaction_type": 0,
            "description": "payment",
            "detailed_description": ["payment", "rent"]
        }))
        .unwrap();

        assert!(record.is_physical_location);
        assert_eq!(record.transaction_kind, TransactionKind::Payment);
        assert_eq!(record.detailed_label, "payment=>rent");
    }

    #[test]
    fn test_upgrade_v3_is_identity() {
        let current = classify("13005043");
        let json = serde_json::to_string(&current).unwrap();
        assert_eq!(upgrade_json(&json).unwrap(), current);

        let unknown = ClassificationRecord::unknown("42");
        let json = serde_json::to_string(&unknown).unwrap();
        assert_eq!(upgrade_json(&json).unwrap(), unknown);
    }

    #[test]
    fn test_upgrade_short_label_from_path() {
        let record = upgrade_value(json!({"id": "1", "detailed_description": "travel=>rail"})).unwrap();
        assert_eq!(record.short_label, "travel");
    }

    #[test]
    fn test_upgrade_errors() {
        assert!(matches!(
            upgrade_value(json!({"description": "x", "detailed_description": "x"})),
            Err(MigrationError::MissingId)
        ));
        assert!(matches!(
            upgrade_value(json!({"id": "1", "detailed_description": []})),
            Err(MigrationError::EmptyLabel(_))
        ));
        assert!(matches!(
            upgrade_value(json!({"id": "1", "transaction_type": 7, "description": "x"})),
            Err(MigrationError::UnknownKind { code: 7, .. })
        ));
        assert!(matches!(upgrade_json("not json"), Err(MigrationError::Malformed(_))));
        assert!(matches!(
            upgrade_value(json!({"id": "1", "detailed_description": ["shops=>books", "used"]})),
            Err(MigrationError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_store_and_load_current_record() {
        let conn = test_store();
        let record = classify("13005006");

        store_classification(&conn, "tx-1", &record).unwrap();

        assert_eq!(load_classification(&conn, "tx-1").unwrap(), Some(record));
        assert_eq!(load_classification(&conn, "tx-missing").unwrap(), None);
    }

    #[test]
    fn test_load_adapts_legacy_row() {
        let conn = test_store();
        insert_raw(
            &conn,
            "tx-old",
            "16000000",
            &json!({"id": "16000000", "description": "payment", "detailed_description": "payment"}),
            None,
        );

        assert_eq!(load_classification(&conn, "tx-old").unwrap(), Some(classify("16000000")));
    }

    #[test]
    fn test_migrate_store_is_idempotent() {
        let conn = test_store();
        store_classification(&conn, "tx-current", &classify("22016000")).unwrap();
        insert_raw(
            &conn,
            "tx-v1",
            "13005006",
            &json!({"id": "13005006", "description": "food and drink", "detailed_description": "food and drink=>restaurants=>sushi"}),
            Some(1),
        );
        insert_raw(
            &conn,
            "tx-v2",
            "16001000",
            &json!({"id": "16001000", "physical_location": false, "transaction_type": 0,
                    "description": "payment", "detailed_description": ["payment", "credit card"]}),
            Some(2),
        );
        insert_raw(&conn, "tx-broken", "", &json!({"description": "orphan"}), None);

        let first = migrate_store(&conn).unwrap();
        assert_eq!(first.examined, 3);
        assert_eq!(first.upgraded, 2);
        assert_eq!(first.failed.len(), 1);
        assert_eq!(first.failed[0].0, "tx-broken");
        assert_eq!(first.upgraded_from.get(&SchemaVersion::V1), Some(&1));
        assert_eq!(first.upgraded_from.get(&SchemaVersion::V2), Some(&1));
        assert_eq!(first.upgraded_from.get(&SchemaVersion::V3), None);

        let second = migrate_store(&conn).unwrap();
        assert_eq!(second.examined, 1);
        assert_eq!(second.upgraded, 0);
        assert!(second.upgraded_from.is_empty());

        let stored: String = conn
            .query_row("SELECT record FROM classifications WHERE transaction_id = 'tx-v2'", [], |row| row.get(0))
            .unwrap();
        let value: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(SchemaVersion::detect(&value), SchemaVersion::V3);
        assert_eq!(value["detailed_label"], "payment=>credit card");

        assert_eq!(load_classification(&conn, "tx-v1").unwrap(), Some(classify("13005006")));
    }

    #[test]
    fn test_migrate_store_rolls_back_on_database_error() {
        let conn = test_store();
        let v1 = json!({"id": "16000000", "description": "payment", "detailed_description": "payment"});
        insert_raw(&conn, "tx-a", "16000000", &v1, Some(1));
        insert_raw(&conn, "tx-b", "16000000", &v1, Some(1));
        conn.execute_batch(
            "CREATE TRIGGER reject_tx_b BEFORE UPDATE ON classifications
             WHEN NEW.transaction_id = 'tx-b'
             BEGIN SELECT RAISE(ABORT, 'read-only row'); END;",
        )
        .unwrap();

        assert!(migrate_store(&conn).is_err());

        let versions: Vec<i64> = conn
            .prepare("SELECT schema_version FROM classifications ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(versions, vec![1, 1]);
        assert!(conn.is_autocommit());
    }
}
