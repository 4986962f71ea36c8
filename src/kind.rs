// 💳 Transaction Kind - coarse accounting classification
//
// Persisted records store the integer code, so the numbering here is part of
// the storage format and must never be reordered.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TRANSACTION KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransactionKind {
    /// Money leaving the account to settle a balance (card payment, rent, loan)
    Payment,

    /// A purchase or fee charged against the account
    Charge,

    /// Money returned to the account (refunds, reversals)
    Credit,

    /// Interest charged by the institution
    InterestCharge,

    /// Penalty for a late payment
    LateFee,
}

impl TransactionKind {
    /// Every kind, in storage-code order
    pub const ALL: [TransactionKind; 5] = [
        TransactionKind::Payment,
        TransactionKind::Charge,
        TransactionKind::Credit,
        TransactionKind::InterestCharge,
        TransactionKind::LateFee,
    ];

    /// Integer code used in persisted records
    pub fn code(self) -> u8 {
        match self {
            TransactionKind::Payment => 0,
            TransactionKind::Charge => 1,
            TransactionKind::Credit => 2,
            TransactionKind::InterestCharge => 3,
            TransactionKind::LateFee => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Payment => "Payment",
            TransactionKind::Charge => "Charge",
            TransactionKind::Credit => "Credit",
            TransactionKind::InterestCharge => "InterestCharge",
            TransactionKind::LateFee => "LateFee",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TransactionKind> for u8 {
    fn from(kind: TransactionKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for TransactionKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TransactionKind::from_code(code).ok_or_else(|| format!("unknown transaction kind code {}", code))
    }
}

// ============================================================================
// TESTS
// ============================================================================
