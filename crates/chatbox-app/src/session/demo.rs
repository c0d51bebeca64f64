//! Single-user demo session state

use chatbox_core::{ChatMessage, Sender};

use crate::text_input::TextInput;

/// Bot line appended when the demo reaches its final diagnosis
pub const TERMINAL_REPLY: &str = r#"Please see the AI suggestions under "Potential Diagnoses""#;

#[derive(Debug, Clone, Default)]
pub struct DemoSession {
    pub messages: Vec<ChatMessage<Sender>>,
    /// Follow-up question chips from the last intermediate reply
    pub questions: Vec<String>,
    pub show_questions: bool,
    /// 1-based index of the chosen chip; 0 when none is chosen
    pub selected_question: usize,
    pub input: TextInput,
    pub medical_history: Vec<String>,
    pub potential_diagnoses: Vec<String>,
}

impl DemoSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chips currently on screen
    pub fn visible_questions(&self) -> &[String] {
        if self.show_questions {
            &self.questions
        } else {
            &[]
        }
    }

    /// Select chip `index`, or deselect it if it is already selected
    pub fn toggle_question(&mut self, index: usize) {
        self.selected_question = if self.selected_question == index {
            0
        } else {
            index
        };
    }
}
