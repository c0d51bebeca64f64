//! Bottom status line: last failure notice, or the focused pane

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusLine<'a> {
    notice: Option<&'a str>,
    focus: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(notice: Option<&'a str>, focus: &'a str) -> Self {
        Self { notice, focus }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notice {
            Some(notice) => Line::from(vec![
                Span::styled(" ✗ ", styles::status_red()),
                Span::styled(notice.to_string(), styles::status_red()),
            ]),
            None => Line::from(vec![
                Span::styled(" Focus: ", styles::text_muted()),
                Span::styled(self.focus.to_string(), styles::text_secondary()),
            ]),
        };
        Paragraph::new(line).render(area, buf);
    }
}
