//! Single-row text entry with a block cursor

use chatbox_app::text_input::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const PROMPT: &str = "› ";
const PROMPT_WIDTH: usize = 2;

/// Renders a `TextInput`, scrolled horizontally so the cursor stays visible
pub struct InputLine<'a> {
    input: &'a TextInput,
    focused: bool,
    placeholder: &'a str,
}

impl<'a> InputLine<'a> {
    pub fn new(input: &'a TextInput, focused: bool) -> Self {
        Self {
            input,
            focused,
            placeholder: "",
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// First character shown, given `available` columns after the prompt
    fn scroll_start(chars: &[char], cursor: usize, available: usize) -> usize {
        let width = |range: &[char]| -> usize { range.iter().map(|c| c.width().unwrap_or(0)).sum() };
        let mut start = 0;
        // one extra column for the cursor cell itself
        while start < cursor && width(&chars[start..cursor]) + 1 > available {
            start += 1;
        }
        start
    }
}

impl Widget for InputLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let prompt_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        let mut spans = vec![Span::styled(PROMPT, prompt_style)];

        if self.input.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder.to_string(), styles::text_muted()));
            Paragraph::new(Line::from(spans)).render(area, buf);
            return;
        }

        let chars: Vec<char> = self.input.text().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let available = (area.width as usize).saturating_sub(PROMPT_WIDTH);
        let start = Self::scroll_start(&chars, cursor, available);

        let before: String = chars[start..cursor].iter().collect();
        spans.push(Span::styled(before, styles::text_primary()));

        if self.focused {
            let at = chars.get(cursor).copied().unwrap_or(' ');
            spans.push(Span::styled(
                at.to_string(),
                styles::text_primary().add_modifier(Modifier::REVERSED),
            ));
            let after: String = chars.iter().skip(cursor + 1).collect();
            spans.push(Span::styled(after, styles::text_primary()));
        } else {
            let after: String = chars[cursor..].iter().collect();
            spans.push(Span::styled(after, styles::text_primary()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
