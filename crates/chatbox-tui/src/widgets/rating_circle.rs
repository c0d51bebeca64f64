//! Rating badge: a filled-circle glyph colored from red (1) to green (10)

use chatbox_core::RatingBadge;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct RatingCircle {
    badge: RatingBadge,
}

impl RatingCircle {
    pub fn new(rating: f64) -> Self {
        Self {
            badge: RatingBadge::new(rating),
        }
    }

    /// Badge as an inline span, e.g. `◕ 8`
    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!("{} {}", self.badge.glyph(), self.badge.label()),
            styles::rating(self.badge.rgb()),
        )
    }
}

impl Widget for RatingCircle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.span())).render(area, buf);
    }
}
