use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::model::{AlertFeed, RiskLevel};
use crate::ui::components::{panel, short_time};
use crate::ui::theme::{risk_color, HEADER_TEXT, MUTED_TEXT};

/// Live alert feed, most severe first.
pub fn render_alert_feed(feed: &AlertFeed, area: Rect, buf: &mut Buffer) {
    let title = format!(
        "Real-Time Alerts  {} active, {} critical",
        feed.alerts.len(),
        feed.count_at_least(RiskLevel::Critical)
    );

    let mut lines = Vec::with_capacity(feed.alerts.len() * 3);
    for alert in feed.by_severity() {
        let color = risk_color(alert.severity);
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<9}", alert.severity.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                alert.kind.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} · {} account{}",
                    short_time(&alert.timestamp),
                    alert.affected_accounts,
                    if alert.affected_accounts == 1 { "" } else { "s" }
                ),
                Style::default().fg(MUTED_TEXT),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("           {}", alert.message),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::default());
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " All clear. No active alerts.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(title))
        .render(area, buf);
}
