use serde::{Deserialize, Serialize};

/// Headline numbers shown on the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_transactions: u64,
    pub fraud_detected: u64,
    pub blocked_transactions: u64,
    /// Model accuracy in percent.
    pub accuracy: f64,
}

impl DashboardStats {
    /// Share of detected fraud that was blocked outright, in percent.
    pub fn block_rate(&self) -> f64 {
        if self.fraud_detected == 0 {
            return 0.0;
        }
        self.blocked_transactions as f64 * 100.0 / self.fraud_detected as f64
    }
}
