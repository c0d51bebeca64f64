//! Header bar widget
//!
//! Shows the app title, the chat mode and (optionally) key hints.

use chatbox_app::config::ChatMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const TITLE: &str = "AI ChatBox";

const KEY_HINTS: &str = "Tab focus · Enter send · ←/→ rate · Esc clear · Ctrl+C quit";

pub struct MainHeader {
    mode: ChatMode,
    show_key_hints: bool,
}

impl MainHeader {
    pub fn new(mode: ChatMode) -> Self {
        Self {
            mode,
            show_key_hints: true,
        }
    }

    pub fn key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            ChatMode::Consult => "Consultation",
            ChatMode::Demo => "Demo",
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(format!(" {TITLE} "), styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
            Span::styled(self.mode_label(), styles::text_secondary()),
        ];

        if self.show_key_hints {
            let used: usize = spans.iter().map(|s| s.width()).sum();
            let hints_width = KEY_HINTS.chars().count() + 1;
            let room = (inner.width as usize).saturating_sub(used);
            if room > hints_width {
                spans.push(Span::raw(" ".repeat(room - hints_width)));
                spans.push(Span::styled(KEY_HINTS, styles::text_muted()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
