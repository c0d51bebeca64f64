//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can
//! assert on rendered text without a real terminal.

use chatbox_api::test_utils::{consult_reply_json, demo_intermediate_json};
use chatbox_api::{ConsultReply, DemoReply};
use chatbox_app::config::{ChatMode, Settings};
use chatbox_app::handler::update;
use chatbox_app::{AppState, Message};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wide terminal that fits the four consultation columns comfortably
pub const WIDE_WIDTH: u16 = 160;
pub const WIDE_HEIGHT: u16 = 40;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn wide() -> Self {
        Self::with_size(WIDE_WIDTH, WIDE_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one row
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Consultation state without the background prompt
pub fn consult_state() -> AppState {
    let mut settings = Settings::default();
    settings.session.show_background = false;
    AppState::with_settings(settings)
}

/// Consultation state after one patient turn and the canned reply
pub fn consult_state_with_reply() -> AppState {
    let mut state = consult_state();
    update(
        &mut state,
        Message::SendMessage {
            role: chatbox_core::Role::Patient,
            content: "I have a headache".to_string(),
        },
    );
    let reply = ConsultReply::from_value(&consult_reply_json()).expect("fixture parses");
    update(&mut state, Message::ConsultReplied(reply));
    state
}

pub fn demo_state_with_reply() -> AppState {
    let mut settings = Settings::default();
    settings.session.mode = ChatMode::Demo;
    let mut state = AppState::with_settings(settings);
    let reply = DemoReply::from_value(&demo_intermediate_json()).expect("fixture parses");
    update(&mut state, Message::DemoReplied(reply));
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
    }

    #[test]
    fn test_fixture_states() {
        let state = consult_state_with_reply();
        assert_eq!(state.consult.doctor_suggestions.len(), 2);
        assert!(!state.is_loading);

        let demo = demo_state_with_reply();
        assert_eq!(demo.demo.questions.len(), 3);
    }
}
