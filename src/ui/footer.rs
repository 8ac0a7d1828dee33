use crate::notify::Toasts;
use crate::ui::theme::{toast_color, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " Tab/1-8: Page │ r: Refresh │ d: Horizon │ /: Search │ f: Filter │ e: Export │ q: Quit";

/// Key hints, or the newest toast while one is live.
pub struct Footer<'a> {
    toasts: &'a Toasts,
}

impl<'a> Footer<'a> {
    pub fn new(toasts: &'a Toasts) -> Self {
        Self { toasts }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (text, style) = match self.toasts.latest() {
            Some(toast) => (
                format!(" {}", toast.message),
                Style::default()
                    .fg(toast_color(toast.level))
                    .add_modifier(Modifier::BOLD),
            ),
            None => (HINTS.to_string(), dim),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing characters.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
