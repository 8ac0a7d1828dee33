use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Request body for `POST /api/export-report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_transactions: u64,
    pub fraud_detected: u64,
    pub fraud_rate: f64,
    pub amount_saved: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudTypeCount {
    #[serde(rename = "type")]
    pub fraud_type: String,
    pub count: u64,
}

/// `report` payload of `POST /api/export-report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudReport {
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_range: DateRange,
    pub summary: ReportSummary,
    pub top_fraud_types: Vec<FraudTypeCount>,
}
