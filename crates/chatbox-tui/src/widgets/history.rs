//! Consultation history pane

use chatbox_core::ConsultationHistory;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::{wrap_text, RatingCircle, NO_CONTENT};

pub struct HistoryPanel<'a> {
    history: Option<&'a ConsultationHistory>,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(history: Option<&'a ConsultationHistory>) -> Self {
        Self { history }
    }
}

impl Widget for HistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card("Consultation history", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let lines: Vec<Line> = match self.history {
            None => vec![Line::styled(NO_CONTENT, styles::text_muted())],
            Some(ConsultationHistory::Text(text)) => wrap_text(text, width)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_primary()))
                .collect(),
            Some(ConsultationHistory::Structured(map)) => map
                .iter()
                .map(|(key, entry)| {
                    let name = if entry.name.is_empty() { key } else { entry.name.as_str() };
                    Line::from(vec![
                        RatingCircle::new(entry.rating).span(),
                        Span::raw(" "),
                        Span::styled(name.to_string(), styles::text_primary()),
                    ])
                })
                .collect(),
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use serde_json::json;

    #[test]
    fn test_text_history() {
        let history = ConsultationHistory::Text("Three day headache.".into());

        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(HistoryPanel::new(Some(&history)), term.area());

        assert!(term.buffer_contains("Three day headache."));
    }

    #[test]
    fn test_structured_history_lists_entries() {
        let history = ConsultationHistory::from_value(&json!({
            "diagnosis": {
                "a": {"name": "Migraine", "rating": 8},
                "b": {"name": "Sinusitis", "rating": 3}
            }
        }))
        .expect("structured history");

        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(HistoryPanel::new(Some(&history)), term.area());

        assert!(term.buffer_contains("Migraine"));
        assert!(term.buffer_contains("Sinusitis"));
    }

    #[test]
    fn test_placeholder_without_history() {
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(HistoryPanel::new(None), term.area());
        assert!(term.buffer_contains("No Content"));
    }
}
