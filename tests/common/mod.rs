//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use chrono::Utc;
use fraudwatch::api::{
    CallFuture, EndpointClient, EndpointError, EndpointRequest, EndpointResult,
    HttpEndpointClient,
};
use fraudwatch::config::ApiConfig;
use fraudwatch::fixtures;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str, timeout_seconds: u32) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
    }
}

pub fn http_client(base_url: &str) -> Arc<dyn EndpointClient> {
    Arc::new(HttpEndpointClient::new(&api_config(base_url, 5)).expect("client builds"))
}

pub fn predictions_payload(days: u32) -> Value {
    json!({
        "success": true,
        "predictions": fixtures::threat_forecast(days, Utc::now()),
    })
}

pub fn explanation_payload() -> Value {
    json!({
        "success": true,
        "explanation": fixtures::explanation(),
        "timestamp": "2026-01-18T10:00:00",
    })
}

pub fn alerts_payload() -> Value {
    let mut body = serde_json::to_value(fixtures::alert_feed(Utc::now())).unwrap();
    body["success"] = Value::Bool(true);
    body
}

struct Scripted {
    result: EndpointResult,
    delay: Duration,
}

/// Script key for a request: the path plus its query, e.g.
/// `/api/predict-patterns?days=7`.
pub fn request_key(request: &EndpointRequest) -> String {
    if request.params.is_empty() {
        return request.path.clone();
    }
    let query: Vec<String> = request
        .params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();
    format!("{}?{}", request.path, query.join("&"))
}

/// In-process client with scripted results per request key.
///
/// Unscripted calls fail with a `Network` error. Delays use tokio time, so
/// they advance instantly under `start_paused`.
#[derive(Default)]
pub struct StubClient {
    script: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<EndpointRequest>>,
    active: Arc<AtomicUsize>,
    peak: AtomicUsize,
}

/// Counts a call as outstanding until its future completes or is dropped.
struct ActiveCall(Arc<AtomicUsize>);

impl Drop for ActiveCall {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl StubClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, key: &str, result: EndpointResult, delay: Duration) {
        self.script
            .lock()
            .entry(key.to_string())
            .or_default()
            .push_back(Scripted { result, delay });
    }

    pub fn respond_ok(&self, key: &str, payload: Value) {
        self.respond(key, Ok(payload), Duration::ZERO);
    }

    pub fn calls(&self) -> Vec<EndpointRequest> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<EndpointRequest> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// Calls whose futures are still alive.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Highest number of calls that were outstanding at the same time.
    pub fn peak_active(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl EndpointClient for StubClient {
    fn call(&self, request: EndpointRequest) -> CallFuture<'_> {
        let next = self
            .script
            .lock()
            .get_mut(&request_key(&request))
            .and_then(VecDeque::pop_front);
        self.calls.lock().push(request);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        let guard = ActiveCall(Arc::clone(&self.active));
        Box::pin(async move {
            let _guard = guard;
            match next {
                Some(scripted) => {
                    if !scripted.delay.is_zero() {
                        tokio::time::sleep(scripted.delay).await;
                    }
                    scripted.result
                }
                None => Err(EndpointError::network("connection refused")),
            }
        })
    }
}

/// Let spawned tasks run until `condition` holds or `timeout` passes.
pub async fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
