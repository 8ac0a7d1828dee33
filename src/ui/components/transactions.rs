use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Widget};

use crate::model::{RiskLevel, Transaction, TransactionStatus};
use crate::ui::components::{meter, panel, short_time};
use crate::ui::theme::{risk_color, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN};

fn status_style(status: TransactionStatus) -> Style {
    let color = match status {
        TransactionStatus::Approved => STATUS_OK,
        TransactionStatus::Blocked => STATUS_ERROR,
        TransactionStatus::Review => STATUS_WARN,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Transaction table. `title` carries the active search/filter summary.
pub fn render_transaction_table(
    rows: &[&Transaction],
    title: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    if rows.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            " No transactions match the current search and filter.",
            Style::default().fg(MUTED_TEXT),
        )))
        .block(panel(title))
        .render(area, buf);
        return;
    }

    let header = Row::new(["ID", "Amount", "Merchant", "Risk", "Status", "Time"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|txn| {
        let level = RiskLevel::from_score(txn.risk_score);
        Row::new(vec![
            Cell::from(txn.id.clone()),
            Cell::from(format!("${:.2}", txn.amount)),
            Cell::from(txn.merchant.clone()),
            Cell::from(format!("{} {:>3.0}%", meter(txn.risk_score, 8), txn.risk_score * 100.0))
                .style(Style::default().fg(risk_color(level))),
            Cell::from(txn.status.label()).style(status_style(txn.status)),
            Cell::from(short_time(&txn.timestamp)).style(Style::default().fg(MUTED_TEXT)),
        ])
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Min(16),
        Constraint::Length(13),
        Constraint::Length(9),
        Constraint::Length(6),
    ];

    Table::new(body, widths)
        .header(header)
        .column_spacing(2)
        .block(panel(title))
        .render(area, buf);
}
