mod common;

use chrono::NaiveDate;
use common::http_client;
use common::mock_backend::{MockBackend, MockResponse};
use fraudwatch::config::ExportConfig;
use fraudwatch::export::{ExportError, ReportExporter};
use serde_json::{json, Value};
use tempfile::TempDir;

fn report_body() -> Value {
    json!({
        "success": true,
        "report": {
            "type": "summary",
            "date_range": {"start": "2026-01-01", "end": "2026-01-18"},
            "generated_at": "2026-01-18T10:00:00",
            "summary": {
                "total_transactions": 12543,
                "fraud_detected": 127,
                "fraud_rate": 1.01,
                "amount_saved": "$234,567"
            },
            "top_fraud_types": [
                {"type": "Card Not Present", "count": 45},
                {"type": "Account Takeover", "count": 32}
            ]
        }
    })
}

fn export_config(dir: &TempDir) -> ExportConfig {
    ExportConfig {
        directory: dir.path().join("reports").to_string_lossy().into_owned(),
        ..ExportConfig::default()
    }
}

#[tokio::test]
async fn test_export_writes_backend_report() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::value(report_body())).await;
    let dir = TempDir::new().unwrap();

    let exporter = ReportExporter::new(http_client(&backend.base_url()), export_config(&dir));
    let today = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
    let path = exporter.export(today).await.expect("export succeeds");

    assert_eq!(path, dir.path().join("reports").join("fraud-report-2026-01-18.json"));
    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, report_body()["report"]);
    assert_eq!(written["generated_at"], "2026-01-18T10:00:00");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/export-report");
    let body = requests[0].json();
    assert_eq!(body["type"], "summary");
    assert_eq!(body["date_range"]["start"], "2026-01-01");
    assert_eq!(body["date_range"]["end"], "2026-01-18");
}

#[tokio::test]
async fn test_export_failure_writes_nothing() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "report generation failed"))
        .await;
    let dir = TempDir::new().unwrap();

    let exporter = ReportExporter::new(http_client(&backend.base_url()), export_config(&dir));
    let err = exporter
        .export(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Endpoint(_)));
    assert!(err.to_string().contains("report generation failed"));
    assert!(!dir.path().join("reports").exists());
}
