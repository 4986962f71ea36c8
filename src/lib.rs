// Category Classifier - Core Library
// Maps aggregator merchant-category codes to normalized classification records

pub mod kind;
pub mod label;
pub mod record;
pub mod table;
pub mod classifier;
pub mod transaction;
pub mod migration;
pub mod summary;

// Re-export commonly used types
pub use kind::TransactionKind;
pub use label::{DetailedLabel, SEPARATOR};
pub use record::{ClassificationRecord, UNKNOWN_LABEL};
pub use table::{CategoryTable, TableEntry, TableError, BUILTIN_ENTRIES};
pub use classifier::{classify, classify_transaction, lookup, table};
pub use transaction::{
    AggregatorTransaction, ClassifiedTransaction,
    classify_all, load_transactions_csv, load_transactions_csv_path,
};
pub use migration::{
    LegacyRecord, MigrationError, MigrationReport, SchemaVersion,
    upgrade, upgrade_json, upgrade_value,
    setup_store, store_classification, load_classification, migrate_store,
};
pub use summary::{CategoryTotal, totals_by_category};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
