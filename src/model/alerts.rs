use serde::{Deserialize, Serialize};

use crate::model::RiskLevel;

/// One real-time fraud alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: RiskLevel,
    /// Alert category, e.g. "Credential Stuffing Attack".
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: String,
    pub affected_accounts: u32,
}

/// Payload of `GET /api/realtime-alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertFeed {
    pub alerts: Vec<Alert>,
    pub timestamp: String,
}

impl AlertFeed {
    /// Alerts ordered most severe first, stable within a severity.
    pub fn by_severity(&self) -> Vec<&Alert> {
        let mut alerts: Vec<&Alert> = self.alerts.iter().collect();
        alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
        alerts
    }

    pub fn count_at_least(&self, level: RiskLevel) -> usize {
        self.alerts.iter().filter(|a| a.severity >= level).count()
    }
}
