use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Sparkline, Table, Widget, Wrap};

use crate::model::{RiskLevel, ThreatForecast};
use crate::ui::components::{format_count, panel};
use crate::ui::theme::{risk_color, BRAND_BLUE, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

/// Threat forecast for the requested horizon.
pub fn render_forecast(forecast: &ThreatForecast, area: Rect, buf: &mut Buffer) {
    let [timeline_area, threats_area, bottom] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(8),
        Constraint::Length(7),
    ])
    .areas(area);
    let [sectors_area, hotspots_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(bottom);

    let peak = forecast
        .peak_day()
        .map(|p| format!("  peak {} at {:.0}%", p.date, p.risk_score * 100.0))
        .unwrap_or_default();
    let values = forecast.timeline_permille();
    Sparkline::default()
        .block(panel(format!("Risk Timeline  {}{}", forecast.forecast_period, peak)))
        .style(Style::default().fg(BRAND_BLUE))
        .max(1000)
        .data(&values)
        .render(timeline_area, buf);

    let mut threats: Vec<Line<'static>> = Vec::new();
    for threat in &forecast.emerging_threats {
        threats.push(Line::from(vec![
            Span::styled(
                format!(" {:<9}", threat.severity.label()),
                Style::default()
                    .fg(risk_color(threat.severity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                threat.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {:.0}% likely · {} · from {}",
                    threat.probability * 100.0,
                    threat.estimated_impact,
                    threat.emergence_date.get(..10).unwrap_or(&threat.emergence_date)
                ),
                Style::default().fg(MUTED_TEXT),
            ),
        ]));
        threats.push(Line::from(Span::styled(
            format!("           {} Mitigation: {}", threat.description, threat.mitigation),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    Paragraph::new(threats)
        .wrap(Wrap { trim: false })
        .block(panel("Emerging Threats"))
        .render(threats_area, buf);

    let header = Row::new(["Sector", "Now", "Predicted", "Change"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
    let rows = forecast.targeted_sectors.iter().map(|s| {
        Row::new(vec![
            Cell::from(s.sector.clone()),
            Cell::from(format!("{:.0}%", s.current_risk * 100.0)),
            Cell::from(format!("{:.0}%", s.predicted_risk * 100.0)),
            Cell::from(format!("{} {:+.1}%", s.trend.arrow(), s.change_percent))
                .style(Style::default().fg(STATUS_ERROR)),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(panel("Targeted Sectors"))
    .render(sectors_area, buf);

    let hotspots: Vec<Line<'static>> = forecast
        .geographic_hotspots
        .iter()
        .map(|h| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", h.trend.arrow()),
                    Style::default().fg(risk_color(RiskLevel::from_score(h.risk_score))),
                ),
                Span::styled(format!("{:<16}", h.region), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!(
                        "{:.0}% · {} attacks",
                        h.risk_score * 100.0,
                        format_count(h.estimated_attacks)
                    ),
                    Style::default().fg(MUTED_TEXT),
                ),
            ])
        })
        .collect();
    Paragraph::new(hotspots)
        .block(panel("Geographic Hotspots"))
        .render(hotspots_area, buf);
}
