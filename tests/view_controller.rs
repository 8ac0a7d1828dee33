mod common;

use std::time::Duration;

use chrono::Utc;
use common::{explanation_payload, predictions_payload, StubClient};
use fraudwatch::api::{
    EndpointError, ErrorKind, ExplainTransaction, PredictPatterns, RealtimeAlerts,
};
use fraudwatch::fixtures;
use fraudwatch::refresh::RefreshTrigger;
use fraudwatch::view::{
    Completion, DataView, EndpointSource, MountedView, RefreshOutcome, ViewStatus,
};

const PREDICT_7: &str = "/api/predict-patterns?days=7";
const PREDICT_30: &str = "/api/predict-patterns?days=30";
const ALERTS: &str = "/api/realtime-alerts";
const EXPLAIN: &str = "/api/explain";

fn explain_source(client: &std::sync::Arc<StubClient>) -> EndpointSource<ExplainTransaction> {
    EndpointSource::new(
        client.clone(),
        ExplainTransaction {
            transaction: fixtures::sample_transaction(),
        },
    )
}

#[tokio::test(start_paused = true)]
async fn test_superseded_response_never_overwrites_newer_one() {
    let client = StubClient::new();
    client.respond(PREDICT_30, Ok(predictions_payload(30)), Duration::from_millis(300));
    client.respond(PREDICT_7, Ok(predictions_payload(7)), Duration::from_millis(10));

    let view = DataView::new(
        "forecast",
        fixtures::threat_forecast(14, Utc::now()),
        EndpointSource::new(client.clone(), PredictPatterns { days: 30 }),
    );

    assert!(view.request_refresh());
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(client.active(), 1);
    assert!(view.retarget(EndpointSource::new(client.clone(), PredictPatterns { days: 7 })));

    tokio::time::sleep(Duration::from_millis(50)).await;
    let state = view.snapshot();
    assert_eq!(state.status, ViewStatus::Ready);
    assert_eq!(state.data.risk_timeline.len(), 7);

    // The 30-day request would have answered at 300ms.
    tokio::time::sleep(Duration::from_millis(500)).await;
    let state = view.snapshot();
    assert_eq!(state.status, ViewStatus::Ready);
    assert_eq!(state.data.risk_timeline.len(), 7);
    assert_eq!(client.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retarget_cancels_the_abandoned_request() {
    let client = StubClient::new();
    client.respond(PREDICT_30, Ok(predictions_payload(30)), Duration::from_millis(300));
    client.respond(PREDICT_7, Ok(predictions_payload(7)), Duration::from_millis(100));

    let view = DataView::new(
        "forecast",
        fixtures::threat_forecast(14, Utc::now()),
        EndpointSource::new(client.clone(), PredictPatterns { days: 30 }),
    );
    view.request_refresh();
    tokio::time::sleep(Duration::from_millis(10)).await;
    view.retarget(EndpointSource::new(client.clone(), PredictPatterns { days: 7 }));
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(client.calls().len(), 2);
    assert_eq!(client.active(), 1);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(client.peak_active(), 1);
    assert_eq!(client.active(), 0);
    assert_eq!(view.snapshot().data.risk_timeline.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_in_flight_request() {
    let client = StubClient::new();
    client.respond(EXPLAIN, Ok(explanation_payload()), Duration::from_millis(200));

    let view = DataView::new("explanation", fixtures::explanation(), explain_source(&client));
    view.request_refresh();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(client.active(), 1);

    view.teardown();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(client.active(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_trigger_while_loading_is_dropped() {
    let client = StubClient::new();
    client.respond(ALERTS, Ok(common::alerts_payload()), Duration::from_millis(1_000));

    let mounted = MountedView::mount(
        DataView::new(
            "alerts",
            fixtures::alert_feed(Utc::now()),
            EndpointSource::new(client.clone(), RealtimeAlerts),
        ),
        vec![RefreshTrigger::Mount, RefreshTrigger::Manual],
    );
    assert_eq!(mounted.view().status(), ViewStatus::Loading);

    assert!(!mounted.trigger());
    assert!(!mounted.trigger());
    assert_eq!(mounted.view().issued(), 1);

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(mounted.view().status(), ViewStatus::Ready);
    assert_eq!(client.calls_to(ALERTS).len(), 1);

    assert!(mounted.trigger());
    assert_eq!(mounted.view().issued(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_interval_stopped_mid_period_never_fires_again() {
    let client = StubClient::new();
    for _ in 0..3 {
        client.respond_ok(ALERTS, common::alerts_payload());
    }
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let view = DataView::new(
        "alerts",
        fixtures::alert_feed(Utc::now()),
        EndpointSource::new(client.clone(), RealtimeAlerts),
    );
    view.set_event_sink(tx);
    let mut mounted = MountedView::mount(
        view.clone(),
        vec![RefreshTrigger::Interval(Duration::from_millis(1_000))],
    );

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(client.calls_to(ALERTS).len(), 1);
    let event = rx.try_recv().expect("first tick applied");
    assert_eq!(event.status, ViewStatus::Ready);

    mounted.unmount();
    tokio::time::sleep(Duration::from_millis(1_000)).await;

    assert_eq!(client.calls_to(ALERTS).len(), 1);
    assert!(rx.try_recv().is_err());
    assert!(view.is_torn_down());
}

#[tokio::test]
async fn test_network_failure_keeps_default_data() {
    let client = StubClient::new();
    client.respond(EXPLAIN, Err(EndpointError::network("timeout")), Duration::ZERO);

    let view = DataView::new("explanation", fixtures::explanation(), explain_source(&client));
    let outcome = view.refresh().await;
    assert_eq!(
        outcome,
        RefreshOutcome::Completed(Completion::Applied(ViewStatus::Failed))
    );

    let state = view.snapshot();
    assert_eq!(state.data, fixtures::explanation());
    assert!(state.last_updated.is_none());
    let error = state.error.expect("error recorded");
    assert_eq!(error.kind, ErrorKind::Network);
    assert_eq!(error.message, "timeout");
}

#[tokio::test]
async fn test_success_sets_last_updated_after_issue() {
    let client = StubClient::new();
    client.respond_ok(PREDICT_7, predictions_payload(7));

    let view = DataView::new(
        "forecast",
        fixtures::threat_forecast(30, Utc::now()),
        EndpointSource::new(client.clone(), PredictPatterns { days: 7 }),
    );
    let issued_at = Utc::now();
    view.refresh().await;

    let state = view.snapshot();
    assert_eq!(state.status, ViewStatus::Ready);
    assert_eq!(state.data.forecast_period, "7 days");
    assert!(state.last_updated.expect("timestamp set") >= issued_at);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_failure_after_success_keeps_stale_data() {
    let client = StubClient::new();
    let mut fresh = fixtures::explanation();
    fresh.confidence = 0.51;
    let mut payload = explanation_payload();
    payload["explanation"] = serde_json::to_value(&fresh).unwrap();
    client.respond_ok(EXPLAIN, payload);
    client.respond(EXPLAIN, Err(EndpointError::from_status(503, "busy")), Duration::ZERO);

    let view = DataView::new("explanation", fixtures::explanation(), explain_source(&client));
    view.refresh().await;
    let first = view.snapshot();
    assert_eq!(first.data.confidence, 0.51);

    view.refresh().await;
    let second = view.snapshot();
    assert_eq!(second.status, ViewStatus::Failed);
    assert_eq!(second.data.confidence, 0.51);
    assert_eq!(second.last_updated, first.last_updated);
    assert_eq!(second.error.unwrap().kind, ErrorKind::Http5xx);
}

#[tokio::test(start_paused = true)]
async fn test_response_after_unmount_is_discarded() {
    let client = StubClient::new();
    client.respond(EXPLAIN, Ok(explanation_payload()), Duration::from_millis(200));

    let default = {
        let mut e = fixtures::explanation();
        e.model_reasoning = "placeholder".to_string();
        e
    };
    let view = DataView::new("explanation", default.clone(), explain_source(&client));
    let mut mounted = MountedView::mount(view.clone(), vec![RefreshTrigger::Mount]);
    assert!(view.in_flight());

    mounted.unmount();
    tokio::time::sleep(Duration::from_millis(500)).await;

    let state = view.snapshot();
    assert_eq!(state.data, default);
    assert_eq!(state.status, ViewStatus::Loading);
    assert!(!view.request_refresh());
}
