//! Loading bar shown while a backend call is in flight

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingBar {
    frame: usize,
}

impl LoadingBar {
    /// `frame` indexes `SPINNER_FRAMES` (wrapped)
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }
}

impl Widget for LoadingBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spinner = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, styles::status_yellow()),
            Span::styled(" Loading...", styles::status_yellow()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
