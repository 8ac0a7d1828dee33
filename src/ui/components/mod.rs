//! Pure renderers: each takes a data snapshot and draws into a buffer.
//!
//! Nothing here touches views, timers or the network.

pub mod alerts;
pub mod analytics;
pub mod biometrics;
pub mod explain;
pub mod forecast;
pub mod insights;
pub mod stats;
pub mod status;
pub mod transactions;

use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

/// Bordered block used by every panel.
pub fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(format!(" {} ", title.into()))
        .title_style(Style::default().fg(HEADER_TEXT))
}

/// `12543` → `"12,543"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Horizontal bar of `width` cells filled to `ratio` (clamped to 0..=1).
pub fn meter(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `HH:MM` for an RFC 3339 or naive ISO timestamp, the raw string otherwise.
pub fn short_time(timestamp: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(timestamp) {
        return parsed.format("%H:%M").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%H:%M").to_string();
    }
    timestamp.to_string()
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
