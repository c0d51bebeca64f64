//! Plain titled list, used for the demo's medical history and potential
//! diagnoses

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::{wrap_text, NO_CONTENT};

pub struct ListCard<'a> {
    title: &'a str,
    items: &'a [String],
}

impl<'a> ListCard<'a> {
    pub fn new(title: &'a str, items: &'a [String]) -> Self {
        Self { title, items }
    }
}

impl Widget for ListCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(self.title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.items.is_empty() {
            Paragraph::new(Line::styled(NO_CONTENT, styles::text_muted())).render(inner, buf);
            return;
        }

        // "• " bullet, continuation lines indented to match
        let width = (inner.width as usize).saturating_sub(2);
        let mut lines = Vec::new();
        for item in self.items {
            for (n, part) in wrap_text(item, width).into_iter().enumerate() {
                let bullet = if n == 0 { "• " } else { "  " };
                lines.push(Line::styled(format!("{bullet}{part}"), styles::text_primary()));
            }
        }
        Paragraph::new(lines).render(inner, buf);
    }
}
