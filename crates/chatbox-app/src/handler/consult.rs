//! Two-party consultation handlers
//!
//! Each handler computes the next snapshot from the values it just
//! produced, so nothing reads state that the same handler has not yet
//! written.

use chatbox_api::{ConsultReply, ConsultRequest};
use chatbox_core::prelude::*;
use chatbox_core::{ChatMessage, Feedback, Role};

use crate::data_collection::Snapshot;
use crate::message::Message;
use crate::state::{AppState, FeedbackPanel};
use crate::text_input::{edit_at_end, EditOp};

use super::{UpdateAction, UpdateResult};

/// Append a chat message and, for the patient, send the turn to the backend.
///
/// Whitespace-only content is ignored.
pub fn handle_send_message(state: &mut AppState, role: Role, content: String) -> UpdateResult {
    if content.trim().is_empty() {
        return UpdateResult::none();
    }

    let message = ChatMessage::new(content.clone(), role);
    state.highlight = None;
    let session = &mut state.consult;
    session.messages.push(message.clone());
    session.input_mut(role).clear();

    match role {
        Role::Patient => {
            session.patient_suggestions.clear();

            let request = ConsultRequest {
                patient_message: session.outgoing_patient_text(&content),
                doctor_message: session.last_doctor_message.take(),
                conversation_id: session.conversation_id.clone(),
            };

            let mut snapshot = Snapshot::starting_with(message);
            if !session.patient_feedback.is_empty() {
                snapshot.patient_feedback = Some(session.patient_feedback.clone());
                snapshot.doctor_feedback = Some(session.doctor_feedback.clone());
                snapshot.diagnosis = session.diagnosis.clone();
                snapshot.conversation_id = session.conversation_id.clone();
                session.patient_feedback = Feedback::empty();
            }
            session.snapshot = snapshot;
            session.show_background = false;

            state.is_loading = true;
            debug!("Sending patient turn");
            UpdateResult::action_then(UpdateAction::AskConsult(request), Message::SnapshotUpdated)
        }
        Role::Doctor => {
            session.doctor_suggestions.clear();
            session.snapshot.messages.push(message);
            session.snapshot.conversation_id = session.conversation_id.clone();

            if !session.patient_suggestions.is_empty() {
                session.patient_feedback = Feedback::empty();
                session.patient_suggestions.clear();
            }
            session.last_doctor_message = Some(content);
            UpdateResult::message(Message::SnapshotUpdated)
        }
    }
}

/// Flatten a successful reply into session state
pub fn handle_reply(state: &mut AppState, reply: ConsultReply) -> UpdateResult {
    state.is_loading = false;
    state.notice = None;

    let session = &mut state.consult;
    session.show_background = false;
    session.clarifications = reply.clarifications.clone().unwrap_or_default();

    if let Some(id) = reply.conversation_id {
        session.conversation_id = Some(id);
    }
    if let Some(history) = reply.history {
        session.history = Some(history);
    }
    if let Some(diagnosis) = reply.diagnosis {
        session.diagnosis = Some(diagnosis);
    }

    if let Some(clarifications) = reply.clarifications {
        let questions = clarifications.questions();
        let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
        session.doctor_suggestions = questions.clone();
        session.doctor_feedback = Feedback::keyed(questions, numbers);
        info!(
            "Received {} clarifying question(s)",
            session.doctor_suggestions.len()
        );
    }

    UpdateResult::none()
}

/// Drop the turn: no bot message, just a status notice
pub fn handle_failure(state: &mut AppState, error: String) -> UpdateResult {
    error!("Failed to fetch the response: {error}");
    state.is_loading = false;
    state.notice = Some(error);
    UpdateResult::none()
}

/// Doctor picked a clarifying question chip.
///
/// The question is matched by exact text against the last clarification
/// map; an unknown question changes nothing.
pub fn handle_doctor_question_select(state: &mut AppState, question: String) -> UpdateResult {
    let session = &mut state.consult;
    let Some(item) = session.clarifications.find(&question).cloned() else {
        error!("Selected question not found in question_to_clarify: {question:?}");
        return UpdateResult::none();
    };

    let patient_feedback = Feedback::for_suggestions(item.selective_answers.clone());
    session.patient_suggestions = item.selective_answers;
    session.patient_feedback = patient_feedback.clone();
    session.doctor_suggestions.clear();

    let message = ChatMessage::new(question.clone(), Role::Doctor);
    session.messages.push(message.clone());

    session.snapshot.messages.push(message);
    session.snapshot.patient_feedback = Some(patient_feedback);
    session.snapshot.doctor_feedback = Some(session.doctor_feedback.clone());
    session.snapshot.conversation_id = session.conversation_id.clone();

    session.doctor_feedback = Feedback::empty();
    session.last_doctor_message = Some(question);
    state.highlight = None;

    UpdateResult::message(Message::SnapshotUpdated)
}

/// Toggle a thumbs rating on one suggestion
pub fn handle_rating_change(
    state: &mut AppState,
    panel: FeedbackPanel,
    number: u32,
    positive: bool,
) -> UpdateResult {
    let session = &mut state.consult;
    match panel {
        FeedbackPanel::Patient => {
            session.patient_feedback.toggle(number, positive);
            session.snapshot.patient_feedback = Some(session.patient_feedback.clone());
            UpdateResult::message(Message::SnapshotUpdated)
        }
        FeedbackPanel::Doctor => {
            session.doctor_feedback.toggle(number, positive);
            UpdateResult::none()
        }
    }
}

/// Edit the free-text comment of a feedback pane
pub fn handle_comment_edit(state: &mut AppState, panel: FeedbackPanel, op: EditOp) -> UpdateResult {
    let session = &mut state.consult;
    match panel {
        FeedbackPanel::Patient => {
            edit_at_end(&mut session.patient_feedback.comment, op);
            session.snapshot.patient_feedback = Some(session.patient_feedback.clone());
            UpdateResult::message(Message::SnapshotUpdated)
        }
        FeedbackPanel::Doctor => {
            edit_at_end(&mut session.doctor_feedback.comment, op);
            UpdateResult::none()
        }
    }
}
