use crate::model::transactions::filter_transactions;
use crate::ui::app::App;
use crate::ui::components::alerts::render_alert_feed;
use crate::ui::components::analytics::render_analytics;
use crate::ui::components::biometrics::render_biometrics;
use crate::ui::components::explain::render_explanation;
use crate::ui::components::forecast::render_forecast;
use crate::ui::components::insights::render_model_insights;
use crate::ui::components::stats::render_stat_cards;
use crate::ui::components::status::status_line;
use crate::ui::components::transactions::render_transaction_table;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::pages::Page;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_BLUE, HEADER_SEPARATOR, MUTED_TEXT};
use crate::view::ViewState;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph, Tabs, Widget};
use ratatui::Frame;

/// Rows of the dashboard page's recent-transactions panel.
const RECENT_TRANSACTIONS: usize = 5;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let [header, tabs, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let health = app.views().health.snapshot();
    frame.render_widget(Header::new(app.backend_url(), &health).widget(), header);
    frame.render_widget(page_tabs(app.page()), tabs);
    frame.render_widget(Clear, body);
    draw_page(app, body, frame.buffer_mut());
    frame.render_widget(Footer::new(app.toasts()).widget(footer), footer);
}

fn page_tabs(active: Page) -> Tabs<'static> {
    let titles = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {}", i + 1, page.title()));
    Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(
            Style::default()
                .fg(BRAND_BLUE)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)))
}

/// Status line on top, page content below.
fn split_status<T>(
    state: &ViewState<T>,
    extra: Option<String>,
    area: Rect,
    buf: &mut Buffer,
) -> Rect {
    let [status_area, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let mut line = status_line(state);
    if let Some(extra) = extra {
        line.spans
            .push(Span::styled(format!("  ·  {}", extra), Style::default().fg(MUTED_TEXT)));
    }
    Paragraph::new(line).render(status_area, buf);
    content
}

/// Render the active page into `buf`.
pub fn draw_page(app: &App, area: Rect, buf: &mut Buffer) {
    let views = app.views();
    match app.page() {
        Page::Dashboard => {
            let stats = views.stats.snapshot();
            let content = split_status(&stats, None, area, buf);
            let [cards, lower] =
                Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(content);
            render_stat_cards(&stats.data, cards, buf);

            let [recent_area, alerts_area] =
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(lower);
            let transactions = views.transactions.snapshot();
            let recent: Vec<_> = transactions.data.iter().take(RECENT_TRANSACTIONS).collect();
            render_transaction_table(&recent, "Recent Transactions", recent_area, buf);
            render_alert_feed(&views.alerts.snapshot().data, alerts_area, buf);
        }
        Page::Transactions => {
            let state = views.transactions.snapshot();
            let search = if app.search_active() {
                format!("search: {}_", app.search())
            } else if app.search().is_empty() {
                "/ to search, f to filter".to_string()
            } else {
                format!("search: {}", app.search())
            };
            let content = split_status(&state, Some(search), area, buf);
            let rows = filter_transactions(&state.data, app.search(), app.status_filter());
            let title = format!("{}  {} shown", app.status_filter().label(), rows.len());
            render_transaction_table(&rows, &title, content, buf);
        }
        Page::Analytics => {
            let state = views.analytics.snapshot();
            let content = split_status(&state, None, area, buf);
            render_analytics(&state.data, content, buf);
        }
        Page::ModelInsights => {
            let state = views.insights.snapshot();
            let content = split_status(&state, None, area, buf);
            render_model_insights(&state.data, content, buf);
        }
        Page::Alerts => {
            let state = views.alerts.snapshot();
            let content = split_status(&state, None, area, buf);
            render_alert_feed(&state.data, content, buf);
        }
        Page::Explainability => {
            let state = views.explanation.snapshot();
            let content = split_status(&state, None, area, buf);
            render_explanation(app.transaction_sample(), &state.data, content, buf);
        }
        Page::Biometrics => {
            let state = views.biometrics.snapshot();
            let content = split_status(&state, None, area, buf);
            render_biometrics(&state.data, content, buf);
        }
        Page::Predictor => {
            let state = views.forecast.snapshot();
            let horizon = format!("horizon {} days, d to change", app.forecast_days());
            let content = split_status(&state, Some(horizon), area, buf);
            render_forecast(&state.data, content, buf);
        }
    }
}
