//! Typed backend endpoints.
//!
//! Each endpoint knows how to build its request and how to pull its canonical
//! payload out of the backend's JSON envelope. Decoding is strict: a missing
//! envelope field or a payload that does not match the schema is a `Decode`
//! failure.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::api::client::EndpointClient;
use crate::api::error::{EndpointError, EndpointResult};
use crate::api::request::EndpointRequest;
use crate::model::{
    AlertFeed, BiometricReport, BiometricSample, Explanation, FraudReport, HealthStatus,
    ReportRequest, ThreatForecast, TransactionSample,
};

pub const EXPLAIN_PATH: &str = "/api/explain";
pub const BIOMETRIC_ANALYSIS_PATH: &str = "/api/biometric-analysis";
pub const PREDICT_PATTERNS_PATH: &str = "/api/predict-patterns";
pub const EXPORT_REPORT_PATH: &str = "/api/export-report";
pub const REALTIME_ALERTS_PATH: &str = "/api/realtime-alerts";
pub const HEALTH_PATH: &str = "/api/health";

/// A named backend endpoint with a typed response.
pub trait Endpoint: Send + Sync + 'static {
    type Output: Send + 'static;

    fn request(&self) -> EndpointRequest;

    fn decode(&self, payload: Value) -> EndpointResult<Self::Output>;
}

/// Issue one call and decode its payload.
pub async fn fetch<E: Endpoint>(
    client: &dyn EndpointClient,
    endpoint: &E,
) -> EndpointResult<E::Output> {
    let payload = client.call(endpoint.request()).await?;
    endpoint.decode(payload)
}

/// Reject `{"success": false, ...}` envelopes that arrive with a 2xx status.
fn check_envelope(payload: &Value) -> EndpointResult<()> {
    if payload.get("success") == Some(&Value::Bool(false)) {
        let message = payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("backend reported failure");
        return Err(EndpointError::decode(message));
    }
    Ok(())
}

/// Decode the named envelope field into `T`.
pub fn decode_field<T: DeserializeOwned>(payload: Value, name: &str) -> EndpointResult<T> {
    check_envelope(&payload)?;
    let Value::Object(mut map) = payload else {
        return Err(EndpointError::decode("expected a JSON object"));
    };
    let value = map
        .remove(name)
        .ok_or_else(|| EndpointError::decode(format!("missing field `{}`", name)))?;
    serde_json::from_value(value)
        .map_err(|e| EndpointError::decode(format!("invalid `{}`: {}", name, e)))
}

/// Decode the whole envelope into `T`.
pub fn decode_body<T: DeserializeOwned>(payload: Value) -> EndpointResult<T> {
    check_envelope(&payload)?;
    serde_json::from_value(payload)
        .map_err(|e| EndpointError::decode(format!("invalid body: {}", e)))
}

/// `POST /api/explain`.
#[derive(Debug, Clone)]
pub struct ExplainTransaction {
    pub transaction: TransactionSample,
}

impl Endpoint for ExplainTransaction {
    type Output = Explanation;

    fn request(&self) -> EndpointRequest {
        EndpointRequest::post(EXPLAIN_PATH, json!(self.transaction))
    }

    fn decode(&self, payload: Value) -> EndpointResult<Explanation> {
        decode_field(payload, "explanation")
    }
}

/// `POST /api/biometric-analysis`.
#[derive(Debug, Clone)]
pub struct AnalyzeBiometrics {
    pub sample: BiometricSample,
}

impl Endpoint for AnalyzeBiometrics {
    type Output = BiometricReport;

    fn request(&self) -> EndpointRequest {
        EndpointRequest::post(BIOMETRIC_ANALYSIS_PATH, json!(self.sample))
    }

    fn decode(&self, payload: Value) -> EndpointResult<BiometricReport> {
        decode_field(payload, "analysis")
    }
}

/// `GET /api/predict-patterns?days=N`.
#[derive(Debug, Clone, Copy)]
pub struct PredictPatterns {
    pub days: u32,
}

impl Endpoint for PredictPatterns {
    type Output = ThreatForecast;

    fn request(&self) -> EndpointRequest {
        EndpointRequest::get(PREDICT_PATTERNS_PATH).with_param("days", self.days)
    }

    fn decode(&self, payload: Value) -> EndpointResult<ThreatForecast> {
        decode_field(payload, "predictions")
    }
}

/// Report returned by the export endpoint.
///
/// `raw` keeps the `report` field exactly as the backend sent it so the
/// exported file mirrors the server output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub report: FraudReport,
    pub raw: Value,
}

/// `POST /api/export-report`.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub request: ReportRequest,
}

impl Endpoint for ExportReport {
    type Output = ExportedReport;

    fn request(&self) -> EndpointRequest {
        EndpointRequest::post(EXPORT_REPORT_PATH, json!(self.request))
    }

    fn decode(&self, payload: Value) -> EndpointResult<ExportedReport> {
        let raw: Value = decode_field(payload, "report")?;
        let report = serde_json::from_value(raw.clone())
            .map_err(|e| EndpointError::decode(format!("invalid `report`: {}", e)))?;
        Ok(ExportedReport { report, raw })
    }
}

/// `GET /api/realtime-alerts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealtimeAlerts;

impl Endpoint for RealtimeAlerts {
    type Output = AlertFeed;

    fn request(&self) -> EndpointRequest {
        EndpointRequest::get(REALTIME_ALERTS_PATH)
    }

    fn decode(&self, payload: Value) -> EndpointResult<AlertFeed> {
        decode_body(payload)
    }
}

/// `GET /api/health`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthCheck;

impl Endpoint for HealthCheck {
    type Output = HealthStatus;

    fn request(&self) -> EndpointRequest {
        EndpointRequest::get(HEALTH_PATH)
    }

    fn decode(&self, payload: Value) -> EndpointResult<HealthStatus> {
        decode_body(payload)
    }
}
