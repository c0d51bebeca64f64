//! Tests for handler module

use super::*;
use crate::config::{ChatMode, Settings};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::session::TERMINAL_REPLY;
use crate::state::{AppState, DiagnosisHover, FeedbackPanel, Focus};
use crate::text_input::EditOp;
use chatbox_api::test_utils::{
    consult_final_reply_json, consult_reply_json, demo_intermediate_json, demo_terminal_json,
};
use chatbox_api::{ConsultReply, DemoReply};
use chatbox_core::{AppPhase, ConversationId, Diagnosis, Role, Sender};
use serde_json::{json, Value};

/// Consult-mode state without the background prompt
fn consult_state() -> AppState {
    let mut settings = Settings::default();
    settings.session.show_background = false;
    AppState::with_settings(settings)
}

fn demo_state() -> AppState {
    let mut settings = Settings::default();
    settings.session.mode = ChatMode::Demo;
    AppState::with_settings(settings)
}

fn type_into(state: &mut AppState, role: Role, text: &str) {
    for c in text.chars() {
        update(
            state,
            Message::InputEdited {
                role,
                op: EditOp::Insert(c),
            },
        );
    }
}

fn consult_replied(state: &mut AppState, value: Value) -> UpdateResult {
    let reply = ConsultReply::from_value(&value).expect("fixture parses");
    update(state, Message::ConsultReplied(reply))
}

fn demo_replied(state: &mut AppState, value: Value) -> UpdateResult {
    let reply = DemoReply::from_value(&value).expect("fixture parses");
    update(state, Message::DemoReplied(reply))
}

fn send(state: &mut AppState, role: Role, content: &str) -> UpdateResult {
    update(
        state,
        Message::SendMessage {
            role,
            content: content.to_string(),
        },
    )
}

// ─────────────────────────────────────────────────────────
// Lifecycle and navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = consult_state();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = consult_state();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_tab_moves_focus_and_clears_highlight() {
    let mut state = consult_state();
    state.highlight = Some(0);

    let msg = handle_key(&state, InputKey::Tab).expect("tab maps to a message");
    update(&mut state, msg);

    assert_eq!(state.focus, Focus::DoctorChat);
    assert_eq!(state.highlight, None);
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut state = consult_state();
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    state.is_loading = true;
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 2);
    assert_eq!(state.spinner_index(4), 1);
}

#[test]
fn test_cursor_stays_within_rows() {
    let mut state = consult_state();
    state.consult.patient_suggestions = vec!["Yes".into(), "No".into()];

    update(&mut state, Message::CursorDown);
    update(&mut state, Message::CursorDown);
    update(&mut state, Message::CursorDown);
    assert_eq!(state.highlight, Some(1));

    update(&mut state, Message::CursorUp);
    update(&mut state, Message::CursorUp);
    assert_eq!(state.highlight, None);
}

// ─────────────────────────────────────────────────────────
// Sending
// ─────────────────────────────────────────────────────────

#[test]
fn test_patient_submit_appends_message_and_asks_backend() {
    let mut state = consult_state();
    type_into(&mut state, Role::Patient, "I have a headache");

    let msg = handle_key(&state, InputKey::Enter).expect("enter submits");
    let result = update(&mut state, msg);

    assert_eq!(state.consult.messages.len(), 1);
    assert_eq!(state.consult.messages[0].content, "I have a headache");
    assert_eq!(state.consult.messages[0].author, Role::Patient);
    assert!(state.consult.patient_input.is_empty());
    assert!(state.is_loading);

    match result.action {
        Some(UpdateAction::AskConsult(request)) => {
            assert_eq!(request.patient_message, "I have a headache");
            assert_eq!(request.doctor_message, None);
            assert_eq!(request.conversation_id, None);
        }
        other => panic!("expected AskConsult, got {other:?}"),
    }
    assert!(matches!(result.message, Some(Message::SnapshotUpdated)));
}

#[test]
fn test_empty_submit_is_a_no_op() {
    let mut state = consult_state();

    let result = send(&mut state, Role::Patient, "   ");

    assert!(state.consult.messages.is_empty());
    assert!(result.action.is_none());
    assert!(result.message.is_none());
    assert!(!state.is_loading);
}

#[test]
fn test_first_patient_turn_carries_background() {
    let mut state = AppState::new();
    assert!(state.consult.is_collecting_background());
    state.focus = Focus::PatientFeedback;

    for c in "Age 34".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).expect("background edit");
        update(&mut state, msg);
    }

    let result = send(&mut state, Role::Patient, "hi");

    match result.action {
        Some(UpdateAction::AskConsult(request)) => {
            assert_eq!(request.patient_message, "Background: Age 34\n\nMessage: hi");
        }
        other => panic!("expected AskConsult, got {other:?}"),
    }
    assert_eq!(state.consult.messages[0].content, "hi");
    assert!(!state.consult.show_background);
}

#[test]
fn test_doctor_send_does_not_call_backend() {
    let mut state = consult_state();

    let result = send(&mut state, Role::Doctor, "Any nausea?");

    assert!(result.action.is_none());
    assert!(matches!(result.message, Some(Message::SnapshotUpdated)));
    assert!(!state.is_loading);
    assert_eq!(
        state.consult.last_doctor_message.as_deref(),
        Some("Any nausea?")
    );
    assert_eq!(state.consult.snapshot.messages.len(), 1);
}

#[test]
fn test_doctor_message_rides_along_with_next_patient_turn() {
    let mut state = consult_state();
    send(&mut state, Role::Doctor, "Any nausea?");

    let result = send(&mut state, Role::Patient, "A little");

    match result.action {
        Some(UpdateAction::AskConsult(request)) => {
            assert_eq!(request.doctor_message.as_deref(), Some("Any nausea?"));
        }
        other => panic!("expected AskConsult, got {other:?}"),
    }
    assert_eq!(state.consult.last_doctor_message, None);
}

// ─────────────────────────────────────────────────────────
// Replies
// ─────────────────────────────────────────────────────────

#[test]
fn test_reply_updates_session() {
    let mut state = consult_state();
    send(&mut state, Role::Patient, "I have a headache");

    consult_replied(&mut state, consult_reply_json());

    assert!(!state.is_loading);
    assert_eq!(
        state.consult.conversation_id,
        Some(ConversationId(json!("conv-001")))
    );
    assert!(state.consult.history.is_some());
    match &state.consult.diagnosis {
        Some(Diagnosis::Ranked(map)) => assert_eq!(map.len(), 4),
        other => panic!("expected ranked diagnosis, got {other:?}"),
    }
    assert_eq!(state.visible_diagnosis_count(), 3);
}

#[test]
fn test_doctor_suggestions_follow_numeric_key_order() {
    let mut state = consult_state();

    consult_replied(&mut state, consult_reply_json());

    let questions: Vec<&str> = state
        .consult
        .doctor_suggestions
        .iter()
        .map(|q| q.question.as_str())
        .collect();
    assert_eq!(
        questions,
        vec!["Do you have a fever?", "Is the pain worse with light?"]
    );
    let keys: Vec<u32> = state.consult.doctor_feedback.ratings.keys().copied().collect();
    assert_eq!(keys, vec![1, 2]);
}

#[test]
fn test_final_reply_keeps_text_diagnosis_and_no_questions() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());

    consult_replied(&mut state, consult_final_reply_json());

    assert!(matches!(state.consult.diagnosis, Some(Diagnosis::Text(_))));
    assert!(state.consult.doctor_suggestions.is_empty());
    assert!(state.consult.clarifications.is_empty());
    assert_eq!(state.visible_diagnosis_count(), 0);
}

#[test]
fn test_failure_keeps_only_the_optimistic_message() {
    let mut state = consult_state();
    send(&mut state, Role::Patient, "I have a headache");

    update(
        &mut state,
        Message::ConsultFailed {
            error: "Backend request failed: connection refused".to_string(),
        },
    );

    assert_eq!(state.consult.messages.len(), 1);
    assert!(!state.is_loading);
    assert!(state.notice.is_some());

    consult_replied(&mut state, consult_reply_json());
    assert_eq!(state.notice, None);
}

// ─────────────────────────────────────────────────────────
// Suggestions and feedback
// ─────────────────────────────────────────────────────────

#[test]
fn test_doctor_question_selection_offers_patient_answers() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());

    let result = update(
        &mut state,
        Message::SelectDoctorQuestion("Is the pain worse with light?".to_string()),
    );

    assert!(matches!(result.message, Some(Message::SnapshotUpdated)));
    assert_eq!(
        state.consult.patient_suggestions,
        vec!["Yes", "No", "Not sure"]
    );
    let keys: Vec<u32> = state.consult.patient_feedback.ratings.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);
    assert!(state.consult.doctor_suggestions.is_empty());
    assert!(state.consult.doctor_feedback.is_empty());

    let last = state.consult.messages.last().expect("doctor message");
    assert_eq!(last.author, Role::Doctor);
    assert_eq!(last.content, "Is the pain worse with light?");

    let snapshot = &state.consult.snapshot;
    assert_eq!(
        snapshot
            .doctor_feedback
            .as_ref()
            .map(|fb| fb.suggestions.len()),
        Some(2)
    );
    assert!(snapshot.patient_feedback.is_some());
}

#[test]
fn test_unmatched_doctor_selection_changes_nothing() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());

    let result = update(
        &mut state,
        Message::SelectDoctorQuestion("Anything else?".to_string()),
    );

    assert!(result.message.is_none());
    assert!(state.consult.messages.is_empty());
    assert_eq!(state.consult.doctor_suggestions.len(), 2);
    assert!(state.consult.patient_suggestions.is_empty());
}

#[test]
fn test_patient_answer_chip_sends_with_feedback_snapshot() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());
    update(
        &mut state,
        Message::SelectDoctorQuestion("Do you have a fever?".to_string()),
    );
    update(
        &mut state,
        Message::RateSuggestion {
            panel: FeedbackPanel::Patient,
            number: 1,
            positive: true,
        },
    );

    state.focus = Focus::PatientChat;
    update(&mut state, Message::CursorDown);
    let msg = handle_key(&state, InputKey::Enter).expect("enter picks chip");
    assert!(matches!(&msg, Message::SelectPatientSuggestion(a) if a == "Yes"));
    let result = update(&mut state, msg);

    match result.action {
        Some(UpdateAction::AskConsult(request)) => {
            assert_eq!(request.patient_message, "Yes");
            assert_eq!(request.doctor_message.as_deref(), Some("Do you have a fever?"));
            assert_eq!(request.conversation_id, Some(ConversationId(json!("conv-001"))));
        }
        other => panic!("expected AskConsult, got {other:?}"),
    }

    let snapshot = &state.consult.snapshot;
    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(
        snapshot.patient_feedback.as_ref().and_then(|fb| fb.rating(1)),
        Some(true)
    );
    assert!(snapshot.diagnosis.is_some());
    assert!(state.consult.patient_feedback.is_empty());
    assert!(state.consult.patient_suggestions.is_empty());
}

#[test]
fn test_rating_toggle_is_involutive() {
    let mut state = consult_state();
    state.consult.patient_feedback =
        chatbox_core::Feedback::for_suggestions(vec!["Yes".to_string(), "No".to_string()]);
    let rate = |positive| Message::RateSuggestion {
        panel: FeedbackPanel::Patient,
        number: 2,
        positive,
    };

    update(&mut state, rate(true));
    assert_eq!(state.consult.patient_feedback.rating(2), Some(true));

    update(&mut state, rate(false));
    assert_eq!(state.consult.patient_feedback.rating(2), Some(false));

    update(&mut state, rate(false));
    assert_eq!(state.consult.patient_feedback.rating(2), None);
}

#[test]
fn test_doctor_rating_does_not_touch_snapshot() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());

    let result = update(
        &mut state,
        Message::RateSuggestion {
            panel: FeedbackPanel::Doctor,
            number: 2,
            positive: false,
        },
    );

    assert!(result.message.is_none());
    assert_eq!(state.consult.doctor_feedback.rating(2), Some(false));
    assert!(state.consult.snapshot.doctor_feedback.is_none());
}

#[test]
fn test_feedback_keys_rate_highlighted_item() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());
    state.focus = Focus::DoctorFeedback;
    update(&mut state, Message::CursorDown);
    update(&mut state, Message::CursorDown);

    let msg = handle_key(&state, InputKey::Left).expect("left rates");
    assert!(matches!(
        msg,
        Message::RateSuggestion {
            panel: FeedbackPanel::Doctor,
            number: 2,
            positive: true,
        }
    ));
}

#[test]
fn test_feedback_keys_without_suggestions_do_nothing() {
    let mut state = consult_state();
    state.focus = Focus::DoctorFeedback;
    assert!(handle_key(&state, InputKey::Right).is_none());
}

#[test]
fn test_patient_comment_edits_update_snapshot() {
    let mut state = consult_state();
    state.consult.patient_feedback = chatbox_core::Feedback::for_suggestions(vec!["Yes".into()]);
    state.focus = Focus::PatientFeedback;

    for c in "ok".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).expect("comment edit");
        update(&mut state, msg);
    }

    assert_eq!(state.consult.patient_feedback.comment, "ok");
    assert_eq!(
        state
            .consult
            .snapshot
            .patient_feedback
            .as_ref()
            .map(|fb| fb.comment.as_str()),
        Some("ok")
    );
}

// ─────────────────────────────────────────────────────────
// Diagnosis hover
// ─────────────────────────────────────────────────────────

#[test]
fn test_mouse_hover_is_cleared_when_pointer_leaves() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());

    update(
        &mut state,
        Message::HoverDiagnosis(DiagnosisHover {
            index: 1,
            anchor: Some((10, 4)),
        }),
    );
    assert_eq!(state.hovered_diagnosis.map(|h| h.index), Some(1));
    assert_eq!(state.focus, Focus::PatientChat);

    update(&mut state, Message::DiagnosisUnhovered);
    assert!(state.hovered_diagnosis.is_none());
}

#[test]
fn test_keyboard_hover_focuses_diagnosis_and_survives_unhover() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());
    state.focus = Focus::Diagnosis;

    let msg = handle_key(&state, InputKey::Right).expect("right hovers");
    update(&mut state, msg);
    assert_eq!(state.hovered_diagnosis.map(|h| h.index), Some(0));

    update(&mut state, Message::DiagnosisUnhovered);
    assert!(state.hovered_diagnosis.is_some());
    assert_eq!(state.focus, Focus::Diagnosis);
}

#[test]
fn test_hover_beyond_visible_cards_is_ignored() {
    let mut state = consult_state();
    consult_replied(&mut state, consult_reply_json());

    update(
        &mut state,
        Message::HoverDiagnosis(DiagnosisHover {
            index: 3,
            anchor: None,
        }),
    );

    assert!(state.hovered_diagnosis.is_none());
}

// ─────────────────────────────────────────────────────────
// Data collection
// ─────────────────────────────────────────────────────────

#[test]
fn test_snapshot_update_records_when_path_configured() {
    let mut state = consult_state();
    state.settings.data_collection.path = Some("feedback.jsonl".into());
    send(&mut state, Role::Doctor, "Any nausea?");

    let result = update(&mut state, Message::SnapshotUpdated);

    match result.action {
        Some(UpdateAction::RecordSnapshot { path, record }) => {
            assert_eq!(path, std::path::PathBuf::from("feedback.jsonl"));
            assert_eq!(record.snapshot.messages.len(), 1);
        }
        other => panic!("expected RecordSnapshot, got {other:?}"),
    }
}

#[test]
fn test_snapshot_update_without_path_only_logs() {
    let mut state = consult_state();
    let result = update(&mut state, Message::SnapshotUpdated);
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Demo
// ─────────────────────────────────────────────────────────

#[test]
fn test_demo_send_and_intermediate_reply() {
    let mut state = demo_state();
    for c in "I feel feverish".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).expect("demo edit");
        update(&mut state, msg);
    }

    let msg = handle_key(&state, InputKey::Enter).expect("enter sends");
    let result = update(&mut state, msg);
    match result.action {
        Some(UpdateAction::AskDemo(request)) => {
            assert_eq!(request.user_message, "I feel feverish");
            assert_eq!(request.selected_question, 0);
        }
        other => panic!("expected AskDemo, got {other:?}"),
    }
    assert!(state.demo.input.is_empty());
    assert!(state.is_loading);

    demo_replied(&mut state, demo_intermediate_json());

    assert!(!state.is_loading);
    assert!(state.demo.show_questions);
    assert_eq!(state.demo.questions.len(), 3);
    assert_eq!(state.demo.potential_diagnoses, vec!["Influenza", "Common cold"]);
    assert_eq!(state.demo.medical_history, vec!["Asthma", "Penicillin allergy"]);

    let authors: Vec<Sender> = state.demo.messages.iter().map(|m| m.author).collect();
    assert_eq!(authors, vec![Sender::User, Sender::Bot]);
    assert_eq!(state.demo.messages[1].content, "Thanks, a few more questions.");
}

#[test]
fn test_demo_empty_send_is_a_no_op() {
    let mut state = demo_state();
    let result = update(&mut state, Message::DemoSend);
    assert!(result.action.is_none());
    assert!(state.demo.messages.is_empty());
}

#[test]
fn test_demo_questions_without_diagnoses() {
    let mut state = demo_state();
    state.demo.potential_diagnoses = vec!["Stale".to_string()];

    demo_replied(&mut state, json!({"questions": {"1": "How long?"}}));

    assert!(state.demo.potential_diagnoses.is_empty());
    assert!(state.demo.messages.is_empty());
    assert_eq!(state.demo.visible_questions(), ["How long?".to_string()]);
}

#[test]
fn test_demo_terminal_reply_hides_questions() {
    let mut state = demo_state();
    demo_replied(&mut state, demo_intermediate_json());

    demo_replied(&mut state, demo_terminal_json());

    assert!(!state.demo.show_questions);
    assert_eq!(state.demo.potential_diagnoses, vec!["Influenza"]);
    assert_eq!(state.demo.medical_history, vec!["Asthma"]);
    let last = state.demo.messages.last().expect("bot reply");
    assert_eq!(last.author, Sender::Bot);
    assert_eq!(last.content, TERMINAL_REPLY);
}

#[test]
fn test_demo_question_chip_toggles_selection() {
    let mut state = demo_state();
    demo_replied(&mut state, demo_intermediate_json());
    state.focus = Focus::DemoQuestions;

    update(&mut state, Message::CursorDown);
    update(&mut state, Message::CursorDown);
    let msg = handle_key(&state, InputKey::Enter).expect("enter toggles");
    update(&mut state, msg);
    assert_eq!(state.demo.selected_question, 2);

    let msg = handle_key(&state, InputKey::Char(' ')).expect("space toggles");
    update(&mut state, msg);
    assert_eq!(state.demo.selected_question, 0);
}

#[test]
fn test_demo_failure_sets_notice() {
    let mut state = demo_state();
    state.is_loading = true;

    update(
        &mut state,
        Message::DemoFailed {
            error: "boom".to_string(),
        },
    );

    assert!(!state.is_loading);
    assert_eq!(state.notice.as_deref(), Some("boom"));
    assert!(state.demo.messages.is_empty());
}
