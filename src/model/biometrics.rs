use serde::{Deserialize, Serialize};

use crate::model::RiskLevel;

/// Keystroke timing captured for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingData {
    /// Mean keystroke interval in milliseconds.
    pub avg_time: f64,
    pub variance: f64,
    pub rhythm_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouseData {
    pub speed: f64,
    pub curvature: f64,
    pub pauses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub browser: String,
    pub os: String,
    pub screen_resolution: String,
    pub timezone: String,
    pub language: String,
    pub is_new: bool,
    pub vpn_detected: bool,
    pub tor_detected: bool,
    pub emulator_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// Session length in seconds.
    pub duration: u64,
    pub pages_visited: u32,
    pub direct_to_payment: bool,
    pub failed_logins: u32,
    pub rapid_clicks: u32,
}

/// Request body for `POST /api/biometric-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricSample {
    pub user_id: String,
    pub typing_data: TypingData,
    pub mouse_data: MouseData,
    pub device_data: DeviceData,
    pub session_data: SessionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingAnalysis {
    pub score: f64,
    pub avg_keystroke_time: f64,
    pub pattern_match: f64,
    pub anomalies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouseAnalysis {
    pub score: f64,
    pub movement_speed: f64,
    pub pattern_match: f64,
    pub anomalies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAttributes {
    pub browser: String,
    pub os: String,
    pub screen: String,
    pub timezone: String,
    pub language: String,
    pub vpn: bool,
    pub tor: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAnalysis {
    pub score: f64,
    pub fingerprint: String,
    pub is_known_device: bool,
    pub device_attributes: DeviceAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalysis {
    pub score: f64,
    pub pattern_match: f64,
    pub anomalies: Vec<String>,
}

/// `analysis` payload of `POST /api/biometric-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricReport {
    pub biometric_risk_score: f64,
    pub risk_level: RiskLevel,
    pub typing_analysis: TypingAnalysis,
    pub mouse_analysis: MouseAnalysis,
    pub device_analysis: DeviceAnalysis,
    pub session_analysis: SessionAnalysis,
    pub confidence: f64,
    pub recommendation: String,
}

impl BiometricReport {
    /// Per-signal scores in display order.
    pub fn signal_scores(&self) -> [(&'static str, f64); 4] {
        [
            ("Typing", self.typing_analysis.score),
            ("Mouse", self.mouse_analysis.score),
            ("Device", self.device_analysis.score),
            ("Session", self.session_analysis.score),
        ]
    }

    /// All anomalies across signals, prefixed with their source.
    pub fn anomalies(&self) -> Vec<String> {
        let sources = [
            ("typing", &self.typing_analysis.anomalies),
            ("mouse", &self.mouse_analysis.anomalies),
            ("session", &self.session_analysis.anomalies),
        ];
        sources
            .iter()
            .flat_map(|(source, list)| list.iter().map(move |a| format!("{}: {}", source, a)))
            .collect()
    }
}
