//! Endpoint client for the fraud backend.
//!
//! ```text
//! Endpoint ──request()──→ EndpointClient::call ──JSON──→ Endpoint::decode ──→ typed payload
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;

pub use client::{CallFuture, ClientError, EndpointClient, HttpEndpointClient};
pub use endpoints::{
    fetch, AnalyzeBiometrics, Endpoint, ExplainTransaction, ExportReport, ExportedReport,
    HealthCheck, PredictPatterns, RealtimeAlerts,
};
pub use error::{EndpointError, EndpointResult, ErrorKind};
pub use request::{EndpointRequest, Method};
