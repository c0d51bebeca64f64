//! Chat pane: transcript, suggestion chips and the input line

use chatbox_app::text_input::TextInput;
use chatbox_core::{ChatMessage, Role, Sender};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

use super::{tail, wrap_text, InputLine};

/// Most chip rows shown at once; the window follows the highlight
const MAX_CHIP_ROWS: usize = 5;

/// Author of a chat line, as the pane displays it
pub trait Speaker: Copy + PartialEq {
    fn label(&self) -> &'static str;
    fn color(&self) -> Color;
}

impl Speaker for Role {
    fn label(&self) -> &'static str {
        Role::label(self)
    }

    fn color(&self) -> Color {
        match self {
            Role::Patient => palette::PATIENT,
            Role::Doctor => palette::DOCTOR,
        }
    }
}

impl Speaker for Sender {
    fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Assistant",
        }
    }

    fn color(&self) -> Color {
        match self {
            Sender::User => palette::USER,
            Sender::Bot => palette::BOT,
        }
    }
}

pub struct ChatPanel<'a, A> {
    title: &'a str,
    messages: &'a [ChatMessage<A>],
    input: &'a TextInput,
    chips: Vec<&'a str>,
    highlight: Option<usize>,
    selected_chip: Option<usize>,
    focused: bool,
    placeholder: &'a str,
}

impl<'a, A: Speaker> ChatPanel<'a, A> {
    pub fn new(title: &'a str, messages: &'a [ChatMessage<A>], input: &'a TextInput) -> Self {
        Self {
            title,
            messages,
            input,
            chips: Vec::new(),
            highlight: None,
            selected_chip: None,
            focused: false,
            placeholder: "Type a message",
        }
    }

    pub fn chips(mut self, chips: Vec<&'a str>) -> Self {
        self.chips = chips;
        self
    }

    /// Chip under the keyboard cursor
    pub fn highlight(mut self, highlight: Option<usize>) -> Self {
        self.highlight = highlight;
        self
    }

    /// Chip marked as chosen (demo questions)
    pub fn selected_chip(mut self, selected: Option<usize>) -> Self {
        self.selected_chip = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn transcript(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in self.messages {
            let author = message.author;
            lines.push(Line::from(Span::styled(
                author.label(),
                styles::speaker(author.color()),
            )));
            lines.extend(
                wrap_text(&message.content, width)
                    .into_iter()
                    .map(|l| Line::styled(l, styles::text_primary())),
            );
        }
        lines
    }

    fn chip_lines(&self, rows: usize) -> Vec<Line<'a>> {
        let start = self
            .highlight
            .map_or(0, |h| (h + 1).saturating_sub(rows));
        self.chips
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(i, chip)| {
                let selected = self.selected_chip == Some(i);
                let marker = if selected { "✓ " } else { "" };
                Line::from(Span::styled(
                    format!(" {marker}{chip} "),
                    styles::chip(self.highlight == Some(i), selected),
                ))
            })
            .collect()
    }
}

impl<A: Speaker> Widget for ChatPanel<'_, A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(self.title, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let chip_rows = self
            .chips
            .len()
            .min(MAX_CHIP_ROWS)
            .min(inner.height.saturating_sub(2) as usize);
        let [transcript_area, chips_area, input_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(chip_rows as u16),
            Constraint::Length(1),
        ])
        .areas(inner);

        let lines = self.transcript(transcript_area.width as usize);
        if lines.is_empty() {
            Paragraph::new(Line::styled("No messages yet", styles::text_muted()))
                .render(transcript_area, buf);
        } else {
            Paragraph::new(tail(lines, transcript_area.height as usize))
                .render(transcript_area, buf);
        }

        if chip_rows > 0 {
            Paragraph::new(self.chip_lines(chip_rows)).render(chips_area, buf);
        }

        InputLine::new(self.input, self.focused)
            .placeholder(self.placeholder)
            .render(input_area, buf);
    }
}
