use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    pub day: String,
    pub legitimate: u64,
    pub fraud: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    /// Percentage of fraud cases in this merchant category.
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: String,
    pub count: u64,
}

/// Analytics page data: weekly trend, category split, hourly volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub fraud_trend: Vec<DailyVolume>,
    pub category_distribution: Vec<CategoryShare>,
    pub hourly_transactions: Vec<HourlyCount>,
}

impl AnalyticsSnapshot {
    /// Fraud share across the whole trend window, as a percentage.
    pub fn fraud_rate(&self) -> f64 {
        let (fraud, total) = self
            .fraud_trend
            .iter()
            .fold((0u64, 0u64), |(f, t), d| (f + d.fraud, t + d.fraud + d.legitimate));
        if total == 0 {
            return 0.0;
        }
        fraud as f64 * 100.0 / total as f64
    }
}
