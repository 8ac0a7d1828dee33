use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::model::{Decision, Explanation, RiskLevel, TransactionSample};
use crate::ui::components::{meter, panel};
use crate::ui::theme::{risk_color, BRAND_BLUE, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

/// Explanation of one model decision for `sample`.
pub fn render_explanation(
    sample: &TransactionSample,
    explanation: &Explanation,
    area: Rect,
    buf: &mut Buffer,
) {
    let [summary_area, middle, reasoning_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(5),
    ])
    .areas(area);
    let [path_area, factors_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(middle);

    let (verdict, verdict_color) = match explanation.decision {
        Decision::Fraud => ("FRAUD", STATUS_ERROR),
        Decision::Legitimate => ("LEGITIMATE", STATUS_OK),
    };
    let level = RiskLevel::from_score(explanation.risk_score);
    let summary = vec![
        Line::from(vec![
            Span::styled(" Decision ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                verdict,
                Style::default().fg(verdict_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Confidence ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{:.0}%", explanation.confidence * 100.0),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled("   Risk ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{:.0}% {}", explanation.risk_score * 100.0, level.label()),
                Style::default().fg(risk_color(level)),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                " {} · ${:.2} at {} · {}{} · {:02}:00 · {} txns/h",
                sample.transaction_id,
                sample.amount,
                sample.merchant,
                sample.location,
                if sample.is_international { " (intl)" } else { "" },
                sample.transaction_hour,
                sample.velocity_1h
            ),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    Paragraph::new(summary)
        .block(panel("Explainable AI"))
        .render(summary_area, buf);

    let mut path: Vec<Line<'static>> = Vec::new();
    for node in &explanation.decision_path {
        path.push(Line::from(vec![
            Span::styled(format!(" {}. ", node.node), Style::default().fg(BRAND_BLUE)),
            Span::styled(node.condition.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("  → {}", node.decision), Style::default().fg(MUTED_TEXT)),
        ]));
        path.push(Line::from(Span::styled(
            format!(
                "    {} samples, {:.0}% fraud",
                node.samples,
                node.fraud_rate * 100.0
            ),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    Paragraph::new(path)
        .block(panel("Decision Path"))
        .render(path_area, buf);

    let mut factors: Vec<Line<'static>> = Vec::new();
    for factor in &explanation.top_factors {
        let (sign, color) = if factor.increases_risk() {
            ("+", STATUS_ERROR)
        } else {
            ("-", STATUS_OK)
        };
        factors.push(Line::from(vec![
            Span::styled(format!(" {} ", sign), Style::default().fg(color)),
            Span::styled(
                format!("{} ({})", factor.factor, factor.value),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  weight {:.2}", factor.weight),
                Style::default().fg(MUTED_TEXT),
            ),
        ]));
        factors.push(Line::from(Span::styled(
            format!("   {}", factor.explanation),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    if !explanation.feature_impacts.is_empty() {
        factors.push(Line::default());
        for (name, impact) in explanation.ranked_impacts() {
            factors.push(Line::from(vec![
                Span::styled(format!(" {:<14}", name), Style::default().fg(HEADER_TEXT)),
                Span::styled(meter(impact * 4.0, 12), Style::default().fg(BRAND_BLUE)),
                Span::styled(format!(" {:.2}", impact), Style::default().fg(MUTED_TEXT)),
            ]));
        }
    }
    Paragraph::new(factors)
        .block(panel("Top Risk Factors"))
        .render(factors_area, buf);

    Paragraph::new(explanation.model_reasoning.clone())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: true })
        .block(panel("Model Reasoning"))
        .render(reasoning_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_renders_decision_and_factors() {
        let area = Rect::new(0, 0, 120, 24);
        let mut buf = Buffer::empty(area);
        render_explanation(
            &fixtures::sample_transaction(),
            &fixtures::explanation(),
            area,
            &mut buf,
        );

        let text = buffer_text(&buf);
        assert!(text.contains("FRAUD"));
        assert!(text.contains("87%"));
        assert!(text.contains("Suspicious Merchant"));
        assert!(text.contains("amount > 1000"));
        assert!(text.contains("TXN_12345"));
    }
}
