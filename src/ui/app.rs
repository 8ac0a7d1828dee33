use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::{
    AnalyzeBiometrics, EndpointClient, ExplainTransaction, HealthCheck, PredictPatterns,
    RealtimeAlerts,
};
use crate::config::Config;
use crate::export::ReportExporter;
use crate::fixtures;
use crate::model::{
    AlertFeed, AnalyticsSnapshot, BiometricReport, DashboardStats, Explanation, HealthStatus,
    ModelInsights, StatusFilter, ThreatForecast, Transaction, TransactionSample,
};
use crate::notify::{ToastLevel, Toasts};
use crate::refresh::RefreshTrigger;
use crate::ui::pages::Page;
use crate::view::{
    DataView, EndpointSource, FixtureSource, MountedView, ViewEvent, ViewStatus,
};

/// Forecast horizons offered by the predictor page, in cycle order.
pub const FORECAST_HORIZONS: [u32; 4] = [7, 14, 30, 60];

/// Every mounted view. Pages read these; nothing else writes them.
pub struct Views {
    pub stats: MountedView<DashboardStats>,
    pub transactions: MountedView<Vec<Transaction>>,
    pub analytics: MountedView<AnalyticsSnapshot>,
    pub insights: MountedView<ModelInsights>,
    pub alerts: MountedView<AlertFeed>,
    pub explanation: MountedView<Explanation>,
    pub biometrics: MountedView<BiometricReport>,
    pub forecast: MountedView<ThreatForecast>,
    pub health: MountedView<HealthStatus>,
}

impl Views {
    fn unmount_all(&mut self) {
        self.stats.unmount();
        self.transactions.unmount();
        self.analytics.unmount();
        self.insights.unmount();
        self.alerts.unmount();
        self.explanation.unmount();
        self.biometrics.unmount();
        self.forecast.unmount();
        self.health.unmount();
    }
}

fn mount<T: Clone + Send + 'static>(
    view: DataView<T>,
    sink: &UnboundedSender<ViewEvent>,
    triggers: Vec<RefreshTrigger>,
) -> MountedView<T> {
    view.set_event_sink(sink.clone());
    MountedView::mount(view, triggers)
}

pub struct App {
    page: Page,
    views: Views,
    client: Arc<dyn EndpointClient>,
    exporter: ReportExporter,
    backend_url: String,
    toasts: Toasts,
    failing: HashSet<String>,
    transaction_sample: TransactionSample,
    search: String,
    search_active: bool,
    status_filter: StatusFilter,
    forecast_days: u32,
    export_in_flight: bool,
    should_quit: bool,
}

impl App {
    /// Build every view and mount it. Must run inside a tokio runtime for
    /// fetches and interval triggers to work.
    pub fn new(
        client: Arc<dyn EndpointClient>,
        config: &Config,
        sink: UnboundedSender<ViewEvent>,
    ) -> Self {
        let on_demand = || vec![RefreshTrigger::Mount, RefreshTrigger::Manual];
        let alerts_every = Duration::from_millis(config.refresh.alerts_interval_ms);
        let health_every = Duration::from_millis(config.refresh.health_interval_ms);
        let forecast_days = config.refresh.default_forecast_days;
        let transaction_sample = fixtures::sample_transaction();

        let views = Views {
            stats: mount(
                DataView::new(
                    "dashboard-stats",
                    fixtures::dashboard_stats(),
                    FixtureSource::new(fixtures::dashboard_stats),
                ),
                &sink,
                on_demand(),
            ),
            transactions: mount(
                DataView::new(
                    "transactions",
                    fixtures::transactions(Utc::now()),
                    FixtureSource::new(|| fixtures::transactions(Utc::now())),
                ),
                &sink,
                on_demand(),
            ),
            analytics: mount(
                DataView::new(
                    "analytics",
                    fixtures::analytics(),
                    FixtureSource::new(fixtures::analytics),
                ),
                &sink,
                on_demand(),
            ),
            insights: mount(
                DataView::new(
                    "model-insights",
                    fixtures::model_insights(),
                    FixtureSource::new(fixtures::model_insights),
                ),
                &sink,
                on_demand(),
            ),
            alerts: mount(
                DataView::new(
                    "alerts",
                    fixtures::alert_feed(Utc::now()),
                    EndpointSource::new(Arc::clone(&client), RealtimeAlerts),
                ),
                &sink,
                vec![
                    RefreshTrigger::Mount,
                    RefreshTrigger::Interval(alerts_every),
                    RefreshTrigger::Manual,
                ],
            ),
            explanation: mount(
                DataView::new(
                    "explanation",
                    fixtures::explanation(),
                    EndpointSource::new(
                        Arc::clone(&client),
                        ExplainTransaction {
                            transaction: transaction_sample.clone(),
                        },
                    ),
                ),
                &sink,
                on_demand(),
            ),
            biometrics: mount(
                DataView::new(
                    "biometrics",
                    fixtures::biometric_report(),
                    EndpointSource::new(
                        Arc::clone(&client),
                        AnalyzeBiometrics {
                            sample: fixtures::sample_biometrics(),
                        },
                    ),
                ),
                &sink,
                on_demand(),
            ),
            forecast: mount(
                DataView::new(
                    "forecast",
                    fixtures::threat_forecast(forecast_days, Utc::now()),
                    EndpointSource::new(
                        Arc::clone(&client),
                        PredictPatterns {
                            days: forecast_days,
                        },
                    ),
                ),
                &sink,
                on_demand(),
            ),
            health: mount(
                DataView::new(
                    "health",
                    HealthStatus::unknown(),
                    EndpointSource::new(Arc::clone(&client), HealthCheck),
                ),
                &sink,
                vec![
                    RefreshTrigger::Mount,
                    RefreshTrigger::Interval(health_every),
                ],
            ),
        };

        let exporter = ReportExporter::new(Arc::clone(&client), config.export.clone());

        Self {
            page: Page::default(),
            views,
            client,
            exporter,
            backend_url: config.api.base_url.clone(),
            toasts: Toasts::default(),
            failing: HashSet::new(),
            transaction_sample,
            search: String::new(),
            search_active: false,
            status_filter: StatusFilter::default(),
            forecast_days,
            export_in_flight: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.search_active = false;
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn transaction_sample(&self) -> &TransactionSample {
        &self.transaction_sample
    }

    pub fn on_tick(&mut self) {
        self.toasts.prune(Instant::now());
    }

    /// Post a toast for every failed refresh and for a view that recovers.
    ///
    /// Each failure is toasted at the same level; the bounded queue keeps a
    /// dead backend from piling them up.
    pub fn on_view_event(&mut self, event: ViewEvent) {
        match event.status {
            ViewStatus::Failed => {
                let reason = event
                    .error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "unknown error".to_string());
                self.toasts.push(
                    ToastLevel::Error,
                    format!("{} refresh failed: {}", event.view, reason),
                );
                self.failing.insert(event.view);
            }
            ViewStatus::Ready => {
                if self.failing.remove(&event.view) {
                    self.toasts
                        .push(ToastLevel::Success, format!("{} is back online", event.view));
                }
            }
            ViewStatus::Idle | ViewStatus::Loading => {}
        }
    }

    /// Fire the manual trigger of every view the current page shows.
    ///
    /// Views with a fetch already in flight ignore it. Returns whether any
    /// view started a new request.
    pub fn refresh_current_page(&mut self) -> bool {
        let views = &self.views;
        let fired = match self.page {
            Page::Dashboard => [
                views.stats.trigger(),
                views.transactions.trigger(),
                views.alerts.trigger(),
            ]
            .contains(&true),
            Page::Transactions => views.transactions.trigger(),
            Page::Analytics => views.analytics.trigger(),
            Page::ModelInsights => views.insights.trigger(),
            Page::Alerts => views.alerts.trigger(),
            Page::Explainability => views.explanation.trigger(),
            Page::Biometrics => views.biometrics.trigger(),
            Page::Predictor => views.forecast.trigger(),
        };
        tracing::debug!(page = self.page.title(), fired, "Manual refresh");
        fired
    }

    pub fn forecast_days(&self) -> u32 {
        self.forecast_days
    }

    /// Move to the next forecast horizon and re-target the forecast view.
    ///
    /// Any request for the previous horizon is abandoned.
    pub fn cycle_forecast_horizon(&mut self) -> u32 {
        let next = FORECAST_HORIZONS
            .iter()
            .position(|d| *d == self.forecast_days)
            .map(|i| FORECAST_HORIZONS[(i + 1) % FORECAST_HORIZONS.len()])
            .unwrap_or(FORECAST_HORIZONS[0]);
        self.forecast_days = next;
        self.views.forecast.retarget(EndpointSource::new(
            Arc::clone(&self.client),
            PredictPatterns { days: next },
        ));
        next
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.search_active = false;
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = self.status_filter.next();
    }

    pub fn export_in_flight(&self) -> bool {
        self.export_in_flight
    }

    /// Claim the export slot. `None` while an export is already running.
    pub fn begin_export(&mut self) -> Option<ReportExporter> {
        if self.export_in_flight {
            self.toasts
                .push(ToastLevel::Info, "Report export already in progress");
            return None;
        }
        self.export_in_flight = true;
        self.toasts.push(ToastLevel::Info, "Generating report...");
        Some(self.exporter.clone())
    }

    pub fn finish_export(&mut self, result: Result<PathBuf, String>) {
        self.export_in_flight = false;
        match result {
            Ok(path) => self.toasts.push(
                ToastLevel::Success,
                format!("Report saved to {}", path.display()),
            ),
            Err(err) => self
                .toasts
                .push(ToastLevel::Error, format!("Export failed: {}", err)),
        }
    }

    /// Stop every refresh policy and tear down every view.
    pub fn shutdown(&mut self) {
        self.views.unmount_all();
        tracing::info!("Dashboard views torn down");
    }
}
