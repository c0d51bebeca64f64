//! Message types for the application (TEA pattern)

use chatbox_api::{ConsultReply, DemoReply};
use chatbox_core::Role;

use crate::input_key::InputKey;
use crate::state::{DiagnosisHover, FeedbackPanel};
use crate::text_input::EditOp;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    /// Move the highlight up in the focused pane
    CursorUp,
    /// Move the highlight down in the focused pane
    CursorDown,
    /// Drop the highlight and any diagnosis hover
    ClearHighlight,

    // ─────────────────────────────────────────────────────────
    // Consultation
    // ─────────────────────────────────────────────────────────
    /// Edit the patient or doctor input line
    InputEdited { role: Role, op: EditOp },
    /// Submit a chat message as `role`
    SendMessage { role: Role, content: String },
    /// Patient picked a canned answer chip
    SelectPatientSuggestion(String),
    /// Doctor picked a clarifying question chip (matched by text)
    SelectDoctorQuestion(String),
    /// Thumbs up (`positive`) or down on suggestion `number`
    RateSuggestion {
        panel: FeedbackPanel,
        number: u32,
        positive: bool,
    },
    CommentEdited { panel: FeedbackPanel, op: EditOp },
    BackgroundEdited(EditOp),
    ConsultReplied(ConsultReply),
    ConsultFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Demo
    // ─────────────────────────────────────────────────────────
    DemoInputEdited(EditOp),
    /// Submit the demo input line
    DemoSend,
    /// Toggle the 1-based question chip
    DemoToggleQuestion(usize),
    DemoReplied(DemoReply),
    DemoFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Diagnosis Pane
    // ─────────────────────────────────────────────────────────
    HoverDiagnosis(DiagnosisHover),
    /// Pointer left every diagnosis card
    DiagnosisUnhovered,

    // ─────────────────────────────────────────────────────────
    // Data Collection
    // ─────────────────────────────────────────────────────────
    /// The feedback snapshot changed
    SnapshotUpdated,
}
