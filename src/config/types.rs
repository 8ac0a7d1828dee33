use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Backend API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the fraud backend (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Polling intervals and request parameters for the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Alert feed polling period in milliseconds (default: 5000).
    #[serde(default = "default_alerts_interval")]
    pub alerts_interval_ms: u64,
    /// Backend health check period in milliseconds (default: 30000).
    #[serde(default = "default_health_interval")]
    pub health_interval_ms: u64,
    /// Initial forecast horizon for the predictor page (default: 30).
    #[serde(default = "default_forecast_days")]
    pub default_forecast_days: u32,
}

/// Report export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the report file is written to (default: current directory).
    #[serde(default = "default_export_directory")]
    pub directory: String,
    /// Report type sent to the backend (default: "summary").
    #[serde(default = "default_report_type")]
    pub report_type: String,
    #[serde(default = "default_range_start")]
    pub range_start: String,
    #[serde(default = "default_range_end")]
    pub range_end: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_alerts_interval() -> u64 {
    5_000
}

fn default_health_interval() -> u64 {
    30_000
}

fn default_forecast_days() -> u32 {
    30
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_report_type() -> String {
    "summary".to_string()
}

fn default_range_start() -> String {
    "2026-01-01".to_string()
}

fn default_range_end() -> String {
    "2026-01-18".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            alerts_interval_ms: default_alerts_interval(),
            health_interval_ms: default_health_interval(),
            default_forecast_days: default_forecast_days(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            report_type: default_report_type(),
            range_start: default_range_start(),
            range_end: default_range_end(),
        }
    }
}
