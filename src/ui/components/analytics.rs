use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Paragraph, Widget};

use crate::model::AnalyticsSnapshot;
use crate::ui::components::{meter, panel};
use crate::ui::theme::{BRAND_BLUE, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub fn render_analytics(snapshot: &AnalyticsSnapshot, area: Rect, buf: &mut Buffer) {
    let [trend_area, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    let [hourly_area, category_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(bottom);

    let fraud_by_day: Vec<(&str, u64)> = snapshot
        .fraud_trend
        .iter()
        .map(|d| (d.day.as_str(), d.fraud))
        .collect();
    BarChart::default()
        .block(panel(format!(
            "Fraud Trend  {:.2}% of volume",
            snapshot.fraud_rate()
        )))
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(STATUS_ERROR))
        .value_style(Style::default().fg(HEADER_TEXT).reversed())
        .data(fraud_by_day.as_slice())
        .render(trend_area, buf);

    let hourly: Vec<(&str, u64)> = snapshot
        .hourly_transactions
        .iter()
        .map(|h| (h.hour.as_str(), h.count))
        .collect();
    BarChart::default()
        .block(panel("Transactions by Hour"))
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(BRAND_BLUE))
        .value_style(Style::default().fg(HEADER_TEXT).reversed())
        .data(hourly.as_slice())
        .render(hourly_area, buf);

    category_breakdown(snapshot, category_area, buf);
}

fn category_breakdown(snapshot: &AnalyticsSnapshot, area: Rect, buf: &mut Buffer) {
    let total: u64 = snapshot.category_distribution.iter().map(|c| c.value).sum();
    let lines: Vec<Line<'static>> = snapshot
        .category_distribution
        .iter()
        .map(|category| {
            let share = if total == 0 {
                0.0
            } else {
                category.value as f64 / total as f64
            };
            Line::from(vec![
                Span::styled(format!(" {:<8}", category.name), Style::default().fg(HEADER_TEXT)),
                Span::styled(meter(share, 12), Style::default().fg(BRAND_BLUE)),
                Span::styled(format!(" {:>5.1}%", share * 100.0), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(panel("Fraud by Category"))
        .render(area, buf);
}
