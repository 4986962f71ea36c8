// 📊 Category Totals - spending grouped by top-level category

use crate::transaction::ClassifiedTransaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Total amount for one top-level category of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub uid: String,

    /// Short label used as the grouping key
    pub flat_type: String,

    pub total: f64,
}

/// Sum amounts per short label, largest total first (ties by label)
pub fn totals_by_category(uid: &str, transactions: &[ClassifiedTransaction]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for classified in transactions {
        *sums.entry(classified.classification.short_label.as_str()).or_insert(0.0) += classified.transaction.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(flat_type, total)| CategoryTotal {
            uid: uid.to_string(),
            flat_type: flat_type.to_string(),
            total,
        })
        .collect();

    totals.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.flat_type.cmp(&b.flat_type)));
    totals
}
