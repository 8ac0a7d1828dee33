use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::model::DashboardStats;
use crate::ui::components::{format_count, panel};
use crate::ui::theme::{BRAND_BLUE, MUTED_TEXT, STATUS_ERROR, STATUS_HIGH, STATUS_OK};

/// Four headline cards side by side.
pub fn render_stat_cards(stats: &DashboardStats, area: Rect, buf: &mut Buffer) {
    let cards = [
        ("Total Transactions", format_count(stats.total_transactions), "last 24 hours".to_string(), BRAND_BLUE),
        ("Fraud Detected", format_count(stats.fraud_detected), "flagged by the ensemble".to_string(), STATUS_ERROR),
        (
            "Blocked",
            format_count(stats.blocked_transactions),
            format!("{:.1}% of detected", stats.block_rate()),
            STATUS_HIGH,
        ),
        ("Accuracy", format!("{:.1}%", stats.accuracy), "model accuracy".to_string(), STATUS_OK),
    ];

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((title, value, caption, color), column) in cards.into_iter().zip(columns.iter()) {
        stat_card(title, value, caption, color).render(*column, buf);
    }
}

fn stat_card(title: &str, value: String, caption: String, color: Color) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(MUTED_TEXT))),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(title))
}
