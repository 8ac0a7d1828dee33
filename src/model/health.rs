use serde::{Deserialize, Serialize};

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub models_loaded: bool,
}

impl HealthStatus {
    /// Placeholder shown before the first health check completes.
    pub fn unknown() -> Self {
        Self {
            status: "unknown".to_string(),
            timestamp: String::new(),
            models_loaded: false,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
