use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Approved,
    Blocked,
    Review,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Blocked => "BLOCKED",
            TransactionStatus::Review => "REVIEW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub merchant: String,
    pub status: TransactionStatus,
    pub risk_score: f64,
    pub timestamp: String,
}

/// Status selector on the transactions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TransactionStatus),
}

impl StatusFilter {
    /// All → Approved → Blocked → Review → All.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(TransactionStatus::Approved),
            StatusFilter::Only(TransactionStatus::Approved) => {
                StatusFilter::Only(TransactionStatus::Blocked)
            }
            StatusFilter::Only(TransactionStatus::Blocked) => {
                StatusFilter::Only(TransactionStatus::Review)
            }
            StatusFilter::Only(TransactionStatus::Review) => StatusFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Transactions",
            StatusFilter::Only(TransactionStatus::Approved) => "Approved",
            StatusFilter::Only(TransactionStatus::Blocked) => "Blocked",
            StatusFilter::Only(TransactionStatus::Review) => "Under Review",
        }
    }

    fn accepts(&self, status: TransactionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Transactions matching a case-insensitive search over id and merchant,
/// restricted to the selected status.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    search: &str,
    filter: StatusFilter,
) -> Vec<&'a Transaction> {
    let needle = search.trim().to_lowercase();
    transactions
        .iter()
        .filter(|t| filter.accepts(t.status))
        .filter(|t| {
            needle.is_empty()
                || t.id.to_lowercase().contains(&needle)
                || t.merchant.to_lowercase().contains(&needle)
        })
        .collect()
}
