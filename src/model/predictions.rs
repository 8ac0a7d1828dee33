use serde::{Deserialize, Serialize};

use crate::model::{RiskLevel, Trend};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergingThreat {
    pub threat_id: String,
    pub name: String,
    pub description: String,
    pub probability: f64,
    pub severity: RiskLevel,
    pub estimated_impact: String,
    pub emergence_date: String,
    pub indicators: Vec<String>,
    pub mitigation: String,
}

/// One day of the risk forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPoint {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub expected_fraud_volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorForecast {
    pub sector: String,
    pub current_risk: f64,
    pub predicted_risk: f64,
    pub trend: Trend,
    pub change_percent: f64,
    pub reason: String,
    pub top_threats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoHotspot {
    pub region: String,
    pub country_codes: Vec<String>,
    pub risk_score: f64,
    pub trend: Trend,
    pub primary_fraud_types: Vec<String>,
    pub estimated_attacks: u64,
}

/// `predictions` payload of `GET /api/predict-patterns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatForecast {
    pub prediction_date: String,
    pub forecast_period: String,
    pub emerging_threats: Vec<EmergingThreat>,
    pub risk_timeline: Vec<RiskPoint>,
    pub targeted_sectors: Vec<SectorForecast>,
    pub geographic_hotspots: Vec<GeoHotspot>,
}

impl ThreatForecast {
    /// Day with the highest forecast risk, if the timeline is non-empty.
    pub fn peak_day(&self) -> Option<&RiskPoint> {
        self.risk_timeline
            .iter()
            .max_by(|a, b| a.risk_score.total_cmp(&b.risk_score))
    }

    /// Timeline scaled to integer per-mille values for sparkline rendering.
    pub fn timeline_permille(&self) -> Vec<u64> {
        self.risk_timeline
            .iter()
            .map(|p| (p.risk_score.clamp(0.0, 1.0) * 1000.0).round() as u64)
            .collect()
    }
}
