use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget, Wrap};

use crate::model::{BiometricReport, RiskLevel};
use crate::ui::components::{meter, panel};
use crate::ui::theme::{risk_color, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

fn flag(on: bool) -> Span<'static> {
    if on {
        Span::styled("yes", Style::default().fg(STATUS_ERROR))
    } else {
        Span::styled("no", Style::default().fg(STATUS_OK))
    }
}

pub fn render_biometrics(report: &BiometricReport, area: Rect, buf: &mut Buffer) {
    let [gauge_area, middle, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(6),
    ])
    .areas(area);
    let [signals_area, device_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(middle);

    let color = risk_color(report.risk_level);
    Gauge::default()
        .block(panel("Behavioral Risk"))
        .gauge_style(Style::default().fg(color))
        .ratio(report.biometric_risk_score.clamp(0.0, 1.0))
        .label(format!(
            "{:.0}% {} · confidence {:.0}%",
            report.biometric_risk_score * 100.0,
            report.risk_level.label(),
            report.confidence * 100.0
        ))
        .render(gauge_area, buf);

    let signals: Vec<Line<'static>> = report
        .signal_scores()
        .iter()
        .map(|(name, score)| {
            let level = RiskLevel::from_score(*score);
            Line::from(vec![
                Span::styled(format!(" {:<8}", name), Style::default().fg(HEADER_TEXT)),
                Span::styled(meter(*score, 16), Style::default().fg(risk_color(level))),
                Span::styled(format!(" {:>3.0}%", score * 100.0), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();
    Paragraph::new(signals)
        .block(panel("Signal Scores"))
        .render(signals_area, buf);

    let device = &report.device_analysis;
    let attrs = &device.device_attributes;
    let label = |text: &str| Span::styled(format!(" {:<12}", text), Style::default().fg(MUTED_TEXT));
    let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT));
    let device_lines = vec![
        Line::from(vec![label("Fingerprint"), value(&device.fingerprint)]),
        Line::from(vec![
            label("Known device"),
            if device.is_known_device {
                Span::styled("yes", Style::default().fg(STATUS_OK))
            } else {
                Span::styled("no", Style::default().fg(STATUS_ERROR))
            },
        ]),
        Line::from(vec![label("Browser"), value(&attrs.browser)]),
        Line::from(vec![label("OS"), value(&attrs.os)]),
        Line::from(vec![label("Screen"), value(&attrs.screen)]),
        Line::from(vec![label("Timezone"), value(&attrs.timezone)]),
        Line::from(vec![label("VPN"), flag(attrs.vpn), Span::raw("   "), label("Tor"), flag(attrs.tor)]),
    ];
    Paragraph::new(device_lines)
        .block(panel("Device"))
        .render(device_area, buf);

    let mut findings = vec![Line::from(vec![
        Span::styled(" Recommendation ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            report.recommendation.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])];
    let anomalies = report.anomalies();
    if anomalies.is_empty() {
        findings.push(Line::from(Span::styled(
            " No behavioral anomalies detected.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        findings.extend(anomalies.into_iter().map(|a| {
            Line::from(Span::styled(format!(" ! {}", a), Style::default().fg(STATUS_ERROR)))
        }));
    }
    Paragraph::new(findings)
        .wrap(Wrap { trim: false })
        .block(panel("Findings"))
        .render(bottom, buf);
}
