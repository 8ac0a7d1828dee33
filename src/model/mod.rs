//! Canonical payload schemas for every view.
//!
//! One schema per endpoint. Fields the backend always sends are required;
//! extra fields are ignored. A payload missing a required field fails to
//! deserialize and surfaces as a `Decode` error instead of a partial value.

pub mod alerts;
pub mod analytics;
pub mod biometrics;
pub mod dashboard;
pub mod explain;
pub mod health;
pub mod insights;
pub mod predictions;
pub mod report;
pub mod transactions;

use serde::{Deserialize, Serialize};

pub use alerts::{Alert, AlertFeed};
pub use analytics::{AnalyticsSnapshot, CategoryShare, DailyVolume, HourlyCount};
pub use biometrics::{BiometricReport, BiometricSample};
pub use dashboard::DashboardStats;
pub use explain::{Decision, DecisionNode, Explanation, RiskFactor, TransactionSample};
pub use health::HealthStatus;
pub use insights::{EnsembleWeight, FeatureWeight, ModelInsights, ModelScore};
pub use predictions::{EmergingThreat, GeoHotspot, RiskPoint, SectorForecast, ThreatForecast};
pub use report::{DateRange, FraudReport, ReportRequest};
pub use transactions::{StatusFilter, Transaction, TransactionStatus};

/// Four-step risk bucket shared by alerts, biometrics and forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
    #[serde(alias = "critical")]
    Critical,
}

impl RiskLevel {
    /// Bucket a 0..1 risk score.
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            RiskLevel::Low
        } else if score < 0.6 {
            RiskLevel::Medium
        } else if score < 0.8 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// Direction of a forecast risk value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Increasing => "▲",
            Trend::Stable => "▶",
            Trend::Decreasing => "▼",
        }
    }
}
