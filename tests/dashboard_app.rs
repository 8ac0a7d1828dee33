mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{predictions_payload, StubClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fraudwatch::api::{EndpointError, ErrorKind};
use fraudwatch::config::Config;
use fraudwatch::model::{StatusFilter, TransactionStatus};
use fraudwatch::notify::ToastLevel;
use fraudwatch::ui::app::App;
use fraudwatch::ui::input::{handle_key, InputAction};
use fraudwatch::ui::pages::Page;
use fraudwatch::ui::render::draw;
use fraudwatch::view::{ViewEvent, ViewStatus};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn make_app(client: &Arc<StubClient>) -> (App, UnboundedReceiver<ViewEvent>) {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    (App::new(client.clone(), &Config::default(), tx), rx)
}

fn drain(app: &mut App, rx: &mut UnboundedReceiver<ViewEvent>) {
    while let Ok(event) = rx.try_recv() {
        app.on_view_event(event);
    }
}

#[tokio::test(start_paused = true)]
async fn test_mount_fetches_every_backend_view() {
    let client = StubClient::new();
    let (app, _rx) = make_app(&client);
    tokio::time::sleep(Duration::from_millis(10)).await;

    let paths: Vec<String> = client.calls().into_iter().map(|c| c.path).collect();
    for expected in [
        "/api/realtime-alerts",
        "/api/explain",
        "/api/biometric-analysis",
        "/api/predict-patterns",
        "/api/health",
    ] {
        assert!(paths.iter().any(|p| p == expected), "missing call to {expected}");
    }
    assert_eq!(
        client.calls_to("/api/predict-patterns")[0].params,
        vec![("days".to_string(), "30".to_string())]
    );

    let views = app.views();
    assert_eq!(views.stats.view().status(), ViewStatus::Ready);
    assert_eq!(views.analytics.view().status(), ViewStatus::Ready);
    assert_eq!(views.alerts.view().status(), ViewStatus::Failed);
}

fn view_event(view: &str, seq: u64, error: Option<EndpointError>) -> ViewEvent {
    ViewEvent {
        view: view.to_string(),
        seq,
        status: if error.is_some() {
            ViewStatus::Failed
        } else {
            ViewStatus::Ready
        },
        error,
    }
}

#[tokio::test(start_paused = true)]
async fn test_every_failure_is_toasted() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);
    assert_eq!(app.toasts().len(), 0);

    app.on_view_event(view_event("alerts", 1, Some(EndpointError::network("timeout"))));
    app.on_view_event(view_event("alerts", 2, Some(EndpointError::network("timeout"))));
    assert_eq!(app.toasts().len(), 2);
    assert!(app.toasts().iter().all(|t| t.level == ToastLevel::Error
        && t.message == "alerts refresh failed: Network: timeout"));

    app.on_view_event(view_event("alerts", 3, None));
    let latest = app.toasts().latest().unwrap();
    assert_eq!(latest.level, ToastLevel::Success);
    assert_eq!(latest.message, "alerts is back online");

    // A view that was never failing recovers silently.
    app.on_view_event(view_event("alerts", 4, None));
    assert_eq!(app.toasts().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_polling_failure_is_toasted_again() {
    let client = StubClient::new();
    let (mut app, mut rx) = make_app(&client);
    tokio::time::sleep(Duration::from_millis(10)).await;
    drain(&mut app, &mut rx);
    assert!(!app.toasts().is_empty());
    assert!(app.toasts().iter().all(|t| t.level == ToastLevel::Error));

    tokio::time::sleep(Duration::from_secs(5)).await;
    drain(&mut app, &mut rx);
    let latest = app.toasts().latest().unwrap();
    assert_eq!(latest.level, ToastLevel::Error);
    assert!(latest.message.starts_with("alerts refresh failed"));
}

#[tokio::test(start_paused = true)]
async fn test_forecast_horizon_cycles_and_retargets() {
    let client = StubClient::new();
    client.respond(
        "/api/predict-patterns?days=60",
        Ok(predictions_payload(60)),
        Duration::from_millis(20),
    );
    let (mut app, _rx) = make_app(&client);

    app.set_page(Page::Predictor);
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.forecast_days(), 60);

    tokio::time::sleep(Duration::from_millis(50)).await;
    let state = app.views().forecast.snapshot();
    assert_eq!(state.status, ViewStatus::Ready);
    assert_eq!(state.data.risk_timeline.len(), 60);

    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.forecast_days(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_horizon_key_only_on_predictor_page() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.forecast_days(), 30);
}

#[tokio::test(start_paused = true)]
async fn test_page_navigation_keys() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);

    assert_eq!(app.page(), Page::Dashboard);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.page(), Page::Transactions);
    handle_key(&mut app, key(KeyCode::BackTab));
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.page(), Page::Predictor);
    handle_key(&mut app, key(KeyCode::Char('5')));
    assert_eq!(app.page(), Page::Alerts);
}

#[tokio::test(start_paused = true)]
async fn test_transaction_search_and_filter() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);
    app.set_page(Page::Transactions);

    handle_key(&mut app, key(KeyCode::Char('/')));
    assert!(app.search_active());
    for ch in "casino".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    // `q` while typing is text, not quit.
    handle_key(&mut app, key(KeyCode::Char('q')));
    handle_key(&mut app, key(KeyCode::Backspace));
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(!app.search_active());
    assert_eq!(app.search(), "casino");
    assert!(!app.should_quit());

    handle_key(&mut app, key(KeyCode::Char('f')));
    handle_key(&mut app, key(KeyCode::Char('f')));
    assert_eq!(
        app.status_filter(),
        StatusFilter::Only(TransactionStatus::Blocked)
    );
}

#[tokio::test(start_paused = true)]
async fn test_manual_refresh_is_dropped_while_loading() {
    let client = StubClient::new();
    client.respond(
        "/api/realtime-alerts",
        Err(EndpointError::network("timeout")),
        Duration::from_millis(500),
    );
    let (mut app, _rx) = make_app(&client);
    app.set_page(Page::Alerts);

    assert_eq!(app.views().alerts.view().status(), ViewStatus::Loading);
    assert!(!app.refresh_current_page());
    handle_key(&mut app, key(KeyCode::Char('r')));
    assert_eq!(app.views().alerts.view().issued(), 1);

    tokio::time::sleep(Duration::from_millis(600)).await;
    let state = app.views().alerts.snapshot();
    assert_eq!(state.status, ViewStatus::Failed);
    assert_eq!(state.error.unwrap().kind, ErrorKind::Network);

    assert!(app.refresh_current_page());
    assert_eq!(app.views().alerts.view().issued(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_export_is_single_flight() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);

    assert_eq!(handle_key(&mut app, key(KeyCode::Char('e'))), InputAction::Export);
    assert!(app.begin_export().is_some());
    assert!(app.begin_export().is_none());
    assert!(app.export_in_flight());

    app.finish_export(Err("Report request failed: Network: timeout".to_string()));
    assert!(!app.export_in_flight());
    let latest = app.toasts().latest().unwrap();
    assert_eq!(latest.level, ToastLevel::Error);
    assert!(latest.message.starts_with("Export failed"));
}

#[tokio::test(start_paused = true)]
async fn test_quit_and_shutdown_stop_polling() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);
    tokio::time::sleep(Duration::from_millis(10)).await;

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());

    app.shutdown();
    let polled = client.calls_to("/api/realtime-alerts").len();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(client.calls_to("/api/realtime-alerts").len(), polled);
    assert!(app.views().alerts.view().is_torn_down());
    assert!(!app.views().health.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_draw_every_page() {
    let client = StubClient::new();
    let (mut app, _rx) = make_app(&client);
    let mut terminal = Terminal::new(TestBackend::new(150, 48)).unwrap();

    for page in Page::ALL {
        app.set_page(page);
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("FraudWatch"));
        assert!(text.contains(page.title()), "page {:?} not in tabs", page);
    }
}
