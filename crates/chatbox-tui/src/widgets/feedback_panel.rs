//! Feedback pane: thumbs per suggestion plus a comment line.
//!
//! Before the first patient message the patient pane doubles as the
//! background-information prompt.

use chatbox_app::text_input::TextInput;
use chatbox_core::{ClarifyingQuestion, Feedback};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::{wrap_text, InputLine};

/// Text shown for one rated suggestion
pub trait Suggestion {
    fn text(&self) -> &str;
}

impl Suggestion for String {
    fn text(&self) -> &str {
        self
    }
}

impl Suggestion for ClarifyingQuestion {
    fn text(&self) -> &str {
        &self.question
    }
}

pub struct FeedbackPanel<'a, S> {
    title: &'a str,
    feedback: &'a Feedback<S>,
    highlight: Option<usize>,
    focused: bool,
    background: Option<&'a TextInput>,
}

impl<'a, S: Suggestion> FeedbackPanel<'a, S> {
    pub fn new(title: &'a str, feedback: &'a Feedback<S>) -> Self {
        Self {
            title,
            feedback,
            highlight: None,
            focused: false,
            background: None,
        }
    }

    pub fn highlight(mut self, highlight: Option<usize>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show the background prompt instead of the rating list
    pub fn background(mut self, background: Option<&'a TextInput>) -> Self {
        self.background = background;
        self
    }

    fn render_background(&self, input: &TextInput, area: Rect, buf: &mut Buffer) {
        let [prompt_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let mut lines = vec![Line::styled("Background information", styles::accent_bold())];
        lines.extend(
            wrap_text(
                "Add context before the first message: age, conditions, medication.",
                prompt_area.width as usize,
            )
            .into_iter()
            .map(|l| Line::styled(l, styles::text_secondary())),
        );
        Paragraph::new(lines).render(prompt_area, buf);

        InputLine::new(input, self.focused)
            .placeholder("Background")
            .render(input_area, buf);
    }

    fn suggestion_lines(&self, width: usize) -> Vec<Line<'a>> {
        // thumbs take "△ ▽ " = 4 columns
        let text_width = width.saturating_sub(4).max(1);
        let mut lines = Vec::new();

        for (i, suggestion) in self.feedback.suggestions.iter().enumerate() {
            let rating = self.feedback.rating(self.feedback.key_at(i));
            let (up, up_style) = styles::thumb(rating, true);
            let (down, down_style) = styles::thumb(rating, false);
            let text_style = if self.highlight == Some(i) {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };

            for (n, part) in wrap_text(suggestion.text(), text_width).into_iter().enumerate() {
                let prefix = if n == 0 {
                    vec![
                        Span::styled(up, up_style),
                        Span::raw(" "),
                        Span::styled(down, down_style),
                        Span::raw(" "),
                    ]
                } else {
                    vec![Span::raw("    ")]
                };
                let mut spans = prefix;
                spans.push(Span::styled(part, text_style));
                lines.push(Line::from(spans));
            }
        }
        lines
    }
}

impl<S: Suggestion> Widget for FeedbackPanel<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(self.title, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(input) = self.background {
            self.render_background(input, inner, buf);
            return;
        }

        if self.feedback.is_empty() {
            Paragraph::new(Line::styled("No suggestions to rate", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let [list_area, comment_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.suggestion_lines(list_area.width as usize)).render(list_area, buf);

        let comment = &self.feedback.comment;
        let comment_line = if comment.is_empty() {
            Line::styled("Comment: type to add", styles::text_muted())
        } else {
            Line::from(vec![
                Span::styled("Comment: ", styles::text_secondary()),
                Span::styled(comment.clone(), styles::text_primary()),
            ])
        };
        Paragraph::new(comment_line).render(comment_area, buf);
    }
}
