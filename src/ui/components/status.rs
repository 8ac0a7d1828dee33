use chrono::{DateTime, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{status_color, MUTED_TEXT};
use crate::view::{ViewState, ViewStatus};

/// One-line freshness indicator for a view.
///
/// Failed views say so but keep pointing at the data still on screen.
pub fn status_line<T>(state: &ViewState<T>) -> Line<'static> {
    let color = status_color(state.status);
    let marker = match state.status {
        ViewStatus::Idle => "○",
        ViewStatus::Loading => "◌",
        ViewStatus::Ready | ViewStatus::Failed => "●",
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(color)),
        Span::styled(
            state.status.label().to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let (ViewStatus::Failed, Some(err)) = (state.status, &state.error) {
        spans.push(Span::styled(
            format!(" ({})", err),
            Style::default().fg(color),
        ));
    }

    spans.push(Span::styled(
        format!("  ·  {}", freshness(state.last_updated)),
        Style::default().fg(MUTED_TEXT),
    ));
    Line::from(spans)
}

fn freshness(last_updated: Option<DateTime<Utc>>) -> String {
    match last_updated {
        Some(at) => format!("updated {} UTC", at.format("%H:%M:%S")),
        None => "showing sample data".to_string(),
    }
}
