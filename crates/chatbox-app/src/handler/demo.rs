//! Demo chat handlers

use chatbox_api::{DemoReply, DemoRequest};
use chatbox_core::prelude::*;
use chatbox_core::{ChatMessage, Sender};

use crate::session::TERMINAL_REPLY;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Append the user's message and send it with the selected question index
pub fn handle_send(state: &mut AppState) -> UpdateResult {
    let demo = &mut state.demo;
    let content = demo.input.text().to_string();
    if content.trim().is_empty() {
        return UpdateResult::none();
    }

    demo.messages.push(ChatMessage::new(content.clone(), Sender::User));
    demo.input.clear();

    let request = DemoRequest {
        user_message: content,
        selected_question: demo.selected_question,
    };
    state.is_loading = true;
    UpdateResult::action(UpdateAction::AskDemo(request))
}

pub fn handle_reply(state: &mut AppState, reply: DemoReply) -> UpdateResult {
    state.is_loading = false;
    state.notice = None;
    state.highlight = None;

    let demo = &mut state.demo;
    match reply {
        DemoReply::Intermediate {
            questions,
            brief_response,
            diagnoses,
            medical_history,
        } => {
            debug!("Demo reply with {} question(s)", questions.len());
            demo.questions = questions;
            demo.show_questions = true;
            demo.potential_diagnoses = diagnoses;
            if let Some(brief) = brief_response {
                demo.messages.push(ChatMessage::new(brief, Sender::Bot));
            }
            demo.medical_history = medical_history;
            demo.selected_question = 0;
        }
        DemoReply::Terminal {
            diagnosis,
            medical_history,
        } => {
            info!("Demo reached a final diagnosis");
            demo.potential_diagnoses = diagnosis.into_iter().collect();
            demo.show_questions = false;
            demo.messages
                .push(ChatMessage::new(TERMINAL_REPLY, Sender::Bot));
            demo.medical_history = medical_history;
        }
    }

    UpdateResult::none()
}

pub fn handle_failure(state: &mut AppState, error: String) -> UpdateResult {
    error!("Failed to fetch the bot's response: {error}");
    state.is_loading = false;
    state.notice = Some(error);
    UpdateResult::none()
}
