//! Terminal event polling

use chatbox_app::input_key::InputKey;
use chatbox_app::{DiagnosisHover, Message};
use chatbox_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

use crate::render::HitRegions;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Pointer motion becomes a hover over the card under it, or an unhover
pub fn mouse_event_to_message(mouse: MouseEvent, regions: &HitRegions) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Moved => Some(match regions.card_at(mouse.column, mouse.row) {
            Some(index) => Message::HoverDiagnosis(DiagnosisHover {
                index,
                anchor: Some((mouse.column, mouse.row)),
            }),
            None => Message::DiagnosisUnhovered,
        }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(regions: &HitRegions) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) => Ok(mouse_event_to_message(mouse, regions)),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
