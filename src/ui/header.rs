use crate::model::HealthStatus;
use crate::ui::theme::{
    BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK, STATUS_WARN,
};
use crate::view::{ViewState, ViewStatus};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Connection indicator derived from the health view.
fn connection(health: &ViewState<HealthStatus>) -> (&'static str, Color) {
    match health.status {
        ViewStatus::Failed => ("Disconnected", STATUS_ERROR),
        _ if health.last_updated.is_none() => ("Connecting", MUTED_TEXT),
        _ if health.data.is_healthy() => ("Connected", STATUS_OK),
        _ => ("Degraded", STATUS_WARN),
    }
}

pub struct Header<'a> {
    backend_url: &'a str,
    health: &'a ViewState<HealthStatus>,
}

impl<'a> Header<'a> {
    pub fn new(backend_url: &'a str, health: &'a ViewState<HealthStatus>) -> Self {
        Self {
            backend_url,
            health,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (label, color) = connection(self.health);

        let mut spans = vec![
            Span::styled(
                "  FraudWatch",
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(label, Style::default().fg(color)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.backend_url.to_string(), text_style),
        ];
        if self.health.data.models_loaded {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("models loaded", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
