//! Main update function - handles state transitions (TEA pattern)

use chatbox_core::AppPhase;

use crate::data_collection::{log_snapshot, SnapshotRecord};
use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{consult, demo, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_loading {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next(state.mode);
            state.highlight = None;
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous(state.mode);
            state.highlight = None;
            UpdateResult::none()
        }

        Message::CursorDown => {
            let rows = state.focused_row_count();
            if rows > 0 {
                state.highlight = Some(match state.valid_highlight() {
                    Some(i) => (i + 1).min(rows - 1),
                    None => 0,
                });
            }
            UpdateResult::none()
        }

        Message::CursorUp => {
            state.highlight = match state.valid_highlight() {
                Some(0) | None => None,
                Some(i) => Some(i - 1),
            };
            UpdateResult::none()
        }

        Message::ClearHighlight => {
            state.highlight = None;
            state.hovered_diagnosis = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Consultation
        // ─────────────────────────────────────────────────────────
        Message::InputEdited { role, op } => {
            state.consult.input_mut(role).apply(op);
            UpdateResult::none()
        }
        Message::SendMessage { role, content } => consult::handle_send_message(state, role, content),
        Message::SelectPatientSuggestion(answer) => {
            consult::handle_send_message(state, chatbox_core::Role::Patient, answer)
        }
        Message::SelectDoctorQuestion(question) => {
            consult::handle_doctor_question_select(state, question)
        }
        Message::RateSuggestion {
            panel,
            number,
            positive,
        } => consult::handle_rating_change(state, panel, number, positive),
        Message::CommentEdited { panel, op } => consult::handle_comment_edit(state, panel, op),
        Message::BackgroundEdited(op) => {
            state.consult.background.apply(op);
            UpdateResult::none()
        }
        Message::ConsultReplied(reply) => consult::handle_reply(state, reply),
        Message::ConsultFailed { error } => consult::handle_failure(state, error),

        // ─────────────────────────────────────────────────────────
        // Demo
        // ─────────────────────────────────────────────────────────
        Message::DemoInputEdited(op) => {
            state.demo.input.apply(op);
            UpdateResult::none()
        }
        Message::DemoSend => demo::handle_send(state),
        Message::DemoToggleQuestion(index) => {
            state.demo.toggle_question(index);
            UpdateResult::none()
        }
        Message::DemoReplied(reply) => demo::handle_reply(state, reply),
        Message::DemoFailed { error } => demo::handle_failure(state, error),

        // ─────────────────────────────────────────────────────────
        // Diagnosis Pane
        // ─────────────────────────────────────────────────────────
        Message::HoverDiagnosis(hover) => {
            if hover.index < state.visible_diagnosis_count() {
                state.hovered_diagnosis = Some(hover);
                if hover.anchor.is_none() {
                    state.focus = Focus::Diagnosis;
                }
            }
            UpdateResult::none()
        }

        Message::DiagnosisUnhovered => {
            if state
                .hovered_diagnosis
                .is_some_and(|hover| hover.anchor.is_some())
            {
                state.hovered_diagnosis = None;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Data Collection
        // ─────────────────────────────────────────────────────────
        Message::SnapshotUpdated => {
            log_snapshot(&state.consult.snapshot);
            match &state.settings.data_collection.path {
                Some(path) => UpdateResult::action(UpdateAction::RecordSnapshot {
                    path: path.clone(),
                    record: SnapshotRecord::now(state.consult.snapshot.clone()),
                }),
                None => UpdateResult::none(),
            }
        }
    }
}
