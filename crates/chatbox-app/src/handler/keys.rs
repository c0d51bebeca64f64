//! Key event handlers per focused pane

use chatbox_core::Role;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DiagnosisHover, FeedbackPanel, Focus};
use crate::text_input::EditOp;

/// Convert key events to messages based on the focused pane
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        InputKey::Esc => return Some(Message::ClearHighlight),
        _ => {}
    }

    match state.focus {
        Focus::PatientChat => handle_key_chat(state, Role::Patient, key),
        Focus::DoctorChat => handle_key_chat(state, Role::Doctor, key),
        Focus::PatientFeedback if state.consult.is_collecting_background() => {
            edit_op(key).map(Message::BackgroundEdited)
        }
        Focus::PatientFeedback => handle_key_feedback(state, FeedbackPanel::Patient, key),
        Focus::DoctorFeedback => handle_key_feedback(state, FeedbackPanel::Doctor, key),
        Focus::Diagnosis => handle_key_diagnosis(state, key),
        Focus::DemoChat => match key {
            InputKey::Enter => Some(Message::DemoSend),
            other => edit_op(other).map(Message::DemoInputEdited),
        },
        Focus::DemoQuestions => handle_key_demo_questions(state, key),
    }
}

/// Map an editing key onto a text edit
fn edit_op(key: InputKey) -> Option<EditOp> {
    match key {
        InputKey::Char(c) => Some(EditOp::Insert(c)),
        InputKey::Backspace => Some(EditOp::Backspace),
        InputKey::Delete => Some(EditOp::Delete),
        InputKey::Left => Some(EditOp::Left),
        InputKey::Right => Some(EditOp::Right),
        InputKey::Home => Some(EditOp::Home),
        InputKey::End => Some(EditOp::End),
        InputKey::CharCtrl('u') => Some(EditOp::Clear),
        _ => None,
    }
}

/// Patient or doctor chat pane: type, submit, or pick a chip
fn handle_key_chat(state: &AppState, role: Role, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Enter => match state.valid_highlight() {
            Some(index) => chip_at(state, role, index),
            None => Some(Message::SendMessage {
                role,
                content: state.consult.input(role).text().to_string(),
            }),
        },
        other => edit_op(other).map(|op| Message::InputEdited { role, op }),
    }
}

fn chip_at(state: &AppState, role: Role, index: usize) -> Option<Message> {
    match role {
        Role::Patient => state
            .consult
            .patient_suggestions
            .get(index)
            .map(|answer| Message::SelectPatientSuggestion(answer.clone())),
        Role::Doctor => state
            .consult
            .doctor_suggestions
            .get(index)
            .map(|q| Message::SelectDoctorQuestion(q.question.clone())),
    }
}

/// Feedback pane: Up/Down pick an item, Left/Right rate it, typing edits
/// the comment
fn handle_key_feedback(state: &AppState, panel: FeedbackPanel, key: InputKey) -> Option<Message> {
    let rate = |positive: bool| {
        let index = state.valid_highlight().unwrap_or(0);
        let number = match panel {
            FeedbackPanel::Patient => {
                let fb = &state.consult.patient_feedback;
                (!fb.is_empty()).then(|| fb.key_at(index))
            }
            FeedbackPanel::Doctor => {
                let fb = &state.consult.doctor_feedback;
                (!fb.is_empty()).then(|| fb.key_at(index))
            }
        };
        number.map(|number| Message::RateSuggestion {
            panel,
            number,
            positive,
        })
    };

    match key {
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Left => rate(true),
        InputKey::Right => rate(false),
        InputKey::Char(c) => Some(Message::CommentEdited {
            panel,
            op: EditOp::Insert(c),
        }),
        InputKey::Backspace => Some(Message::CommentEdited {
            panel,
            op: EditOp::Backspace,
        }),
        InputKey::CharCtrl('u') => Some(Message::CommentEdited {
            panel,
            op: EditOp::Clear,
        }),
        _ => None,
    }
}

/// Diagnosis pane: Left/Right move between cards
fn handle_key_diagnosis(state: &AppState, key: InputKey) -> Option<Message> {
    let count = state.visible_diagnosis_count();
    if count == 0 {
        return None;
    }
    let current = state.hovered_diagnosis.map(|h| h.index);
    let index = match key {
        InputKey::Right | InputKey::Down => current.map_or(0, |i| (i + 1).min(count - 1)),
        InputKey::Left | InputKey::Up => current.map_or(0, |i| i.saturating_sub(1)),
        _ => return None,
    };
    Some(Message::HoverDiagnosis(DiagnosisHover {
        index,
        anchor: None,
    }))
}

/// Demo question chips: move along the row, Enter/Space toggles
fn handle_key_demo_questions(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up => Some(Message::CursorUp),
        InputKey::Right | InputKey::Down => Some(Message::CursorDown),
        InputKey::Enter | InputKey::Char(' ') => state
            .valid_highlight()
            .map(|index| Message::DemoToggleQuestion(index + 1)),
        _ => None,
    }
}
