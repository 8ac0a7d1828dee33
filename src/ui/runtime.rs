use crate::api::{EndpointClient, HttpEndpointClient};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use chrono::Utc;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the dashboard until the user quits.
///
/// The UI loop is synchronous; fetches and timers run on `runtime`.
pub fn run(config: Config, runtime: Handle) -> anyhow::Result<()> {
    let client: Arc<dyn EndpointClient> = Arc::new(HttpEndpointClient::new(&config.api)?);
    let _enter = runtime.enter();

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let (view_tx, mut view_rx) = tokio::sync::mpsc::unbounded_channel();
    let forward = events.sender();
    runtime.spawn(async move {
        while let Some(event) = view_rx.recv().await {
            if forward.send(AppEvent::View(event)).is_err() {
                break;
            }
        }
    });

    let mut app = App::new(client, &config, view_tx);
    tracing::info!(backend = %config.api.base_url, "Dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Export {
                    start_export(&mut app, &runtime, events.sender());
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::View(event)) => app.on_view_event(event),
            Ok(AppEvent::ExportFinished(result)) => app.finish_export(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    Ok(())
}

fn start_export(app: &mut App, runtime: &Handle, done: Sender<AppEvent>) {
    let Some(exporter) = app.begin_export() else {
        return;
    };
    runtime.spawn(async move {
        let result = exporter
            .export(Utc::now().date_naive())
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Report export failed");
                err.to_string()
            });
        let _ = done.send(AppEvent::ExportFinished(result));
    });
}
