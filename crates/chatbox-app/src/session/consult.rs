//! Two-party consultation session state

use chatbox_api::ClarificationMap;
use chatbox_core::{
    ChatMessage, ClarifyingQuestion, ConsultationHistory, ConversationId, Diagnosis, Feedback,
    Role,
};

use crate::data_collection::Snapshot;
use crate::text_input::TextInput;

/// Everything the consultation panes render from.
///
/// Only `handler::update` mutates this; views borrow it.
#[derive(Debug, Clone, Default)]
pub struct ConsultSession {
    /// Shared transcript shown in both chat panes
    pub messages: Vec<ChatMessage<Role>>,
    pub history: Option<ConsultationHistory>,
    pub diagnosis: Option<Diagnosis>,

    /// Canned answers offered to the patient
    pub patient_suggestions: Vec<String>,
    /// Clarifying questions offered to the doctor
    pub doctor_suggestions: Vec<ClarifyingQuestion>,
    pub patient_feedback: Feedback<String>,
    pub doctor_feedback: Feedback<ClarifyingQuestion>,

    /// `question_to_clarify` from the most recent reply
    pub clarifications: ClarificationMap,

    pub patient_input: TextInput,
    pub doctor_input: TextInput,

    pub conversation_id: Option<ConversationId>,
    /// Doctor question the next patient turn answers
    pub last_doctor_message: Option<String>,

    /// Patient context typed before the first message
    pub background: TextInput,
    pub show_background: bool,

    pub snapshot: Snapshot,
}

impl ConsultSession {
    pub fn new(show_background: bool) -> Self {
        Self {
            show_background,
            ..Self::default()
        }
    }

    /// Whether the patient feedback pane is asking for background info
    pub fn is_collecting_background(&self) -> bool {
        self.show_background && self.messages.is_empty()
    }

    /// Text actually sent for a patient turn
    pub fn outgoing_patient_text(&self, content: &str) -> String {
        if self.show_background {
            format!("Background: {}\n\nMessage: {}", self.background.text(), content)
        } else {
            content.to_string()
        }
    }

    pub fn input_mut(&mut self, role: Role) -> &mut TextInput {
        match role {
            Role::Patient => &mut self.patient_input,
            Role::Doctor => &mut self.doctor_input,
        }
    }

    pub fn input(&self, role: Role) -> &TextInput {
        match role {
            Role::Patient => &self.patient_input,
            Role::Doctor => &self.doctor_input,
        }
    }
}
