use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Widget};

use crate::model::ModelInsights;
use crate::ui::components::{meter, panel};
use crate::ui::theme::{BRAND_BLUE, HEADER_TEXT, MUTED_TEXT, STATUS_OK};

pub fn render_model_insights(insights: &ModelInsights, area: Rect, buf: &mut Buffer) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);
    let [performance_area, ensemble_area] =
        Layout::vertical([Constraint::Min(7), Constraint::Length(9)]).areas(right);

    let max_importance = insights
        .feature_importance
        .iter()
        .map(|f| f.value)
        .max()
        .unwrap_or(0)
        .max(1);
    let features: Vec<Line<'static>> = insights
        .feature_importance
        .iter()
        .map(|f| {
            Line::from(vec![
                Span::styled(format!(" {:<22}", f.name), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    meter(f.value as f64 / max_importance as f64, 14),
                    Style::default().fg(BRAND_BLUE),
                ),
                Span::styled(format!(" {:>3}%", f.value), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();
    Paragraph::new(features)
        .block(panel("Feature Importance"))
        .render(left, buf);

    let header = Row::new(["Model", "Accuracy", "Precision", "Recall", "F1"])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
    let rows = insights.model_performance.iter().map(|score| {
        Row::new(vec![
            Cell::from(score.model.clone()),
            Cell::from(format!("{:.1}%", score.accuracy)),
            Cell::from(format!("{:.1}%", score.precision)),
            Cell::from(format!("{:.1}%", score.recall)),
            Cell::from(format!("{:.1}%", score.f1())).style(Style::default().fg(STATUS_OK)),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(panel("Model Performance"))
    .render(performance_area, buf);

    let total: u64 = insights.ensemble_weights.iter().map(|w| w.weight).sum();
    let weights: Vec<Line<'static>> = insights
        .ensemble_weights
        .iter()
        .map(|w| {
            let share = if total == 0 { 0.0 } else { w.weight as f64 / total as f64 };
            Line::from(vec![
                Span::styled(format!(" {:<20}", w.model), Style::default().fg(HEADER_TEXT)),
                Span::styled(meter(share, 16), Style::default().fg(BRAND_BLUE)),
                Span::styled(format!(" {:>3}%", w.weight), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();
    Paragraph::new(weights)
        .block(panel("Ensemble Weights"))
        .render(ensemble_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_renders_models_and_features() {
        let area = Rect::new(0, 0, 130, 20);
        let mut buf = Buffer::empty(area);
        render_model_insights(&fixtures::model_insights(), area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Transaction Frequency"));
        assert!(text.contains("XGBoost"));
        assert!(text.contains("97.2%"));
        assert!(text.contains("Logistic Regression"));
    }
}
