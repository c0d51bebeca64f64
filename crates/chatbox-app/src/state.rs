//! Application state (Model in TEA pattern)

use chatbox_core::{AppPhase, Diagnosis};

use crate::config::{ChatMode, Settings};
use crate::session::{ConsultSession, DemoSession};

/// Pane that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PatientFeedback,
    PatientChat,
    DoctorChat,
    DoctorFeedback,
    Diagnosis,
    DemoChat,
    DemoQuestions,
}

const CONSULT_FOCUS_ORDER: [Focus; 5] = [
    Focus::PatientFeedback,
    Focus::PatientChat,
    Focus::DoctorChat,
    Focus::DoctorFeedback,
    Focus::Diagnosis,
];

/// Spinner advances once per this many ticks
const TICKS_PER_SPINNER_FRAME: usize = 2;

const DEMO_FOCUS_ORDER: [Focus; 2] = [Focus::DemoChat, Focus::DemoQuestions];

impl Focus {
    /// Pane focused when a session starts
    pub fn initial(mode: ChatMode) -> Self {
        match mode {
            ChatMode::Consult => Focus::PatientChat,
            ChatMode::Demo => Focus::DemoChat,
        }
    }

    pub fn next(self, mode: ChatMode) -> Self {
        Self::step(self, mode, 1)
    }

    pub fn previous(self, mode: ChatMode) -> Self {
        Self::step(self, mode, -1)
    }

    fn step(self, mode: ChatMode, delta: isize) -> Self {
        let order: &[Focus] = match mode {
            ChatMode::Consult => &CONSULT_FOCUS_ORDER,
            ChatMode::Demo => &DEMO_FOCUS_ORDER,
        };
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self).unwrap_or(0) as isize;
        order[(current + delta).rem_euclid(len) as usize]
    }
}

/// Which feedback pane an intent targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackPanel {
    Patient,
    Doctor,
}

/// Diagnosis card under the pointer (or keyboard selection).
///
/// `anchor` is the mouse position in terminal cells; keyboard hovers have
/// none and the popover is placed next to the card instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisHover {
    pub index: usize,
    pub anchor: Option<(u16, u16)>,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: ChatMode,
    pub phase: AppPhase,
    pub focus: Focus,

    /// Highlighted row in the focused pane (suggestion chip or feedback item)
    pub highlight: Option<usize>,
    pub hovered_diagnosis: Option<DiagnosisHover>,

    /// A backend call is in flight
    pub is_loading: bool,
    pub spinner_frame: usize,

    /// Last backend failure, shown until the next successful reply
    pub notice: Option<String>,

    pub consult: ConsultSession,
    pub demo: DemoSession,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mode = settings.session.mode;
        Self {
            mode,
            phase: AppPhase::Running,
            focus: Focus::initial(mode),
            highlight: None,
            hovered_diagnosis: None,
            is_loading: false,
            spinner_frame: 0,
            notice: None,
            consult: ConsultSession::new(settings.session.show_background),
            demo: DemoSession::new(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Number of diagnosis cards on screen
    pub fn visible_diagnosis_count(&self) -> usize {
        match &self.consult.diagnosis {
            Some(Diagnosis::Ranked(map)) => map.visible().count(),
            _ => 0,
        }
    }

    /// Number of selectable rows in the focused pane
    pub fn focused_row_count(&self) -> usize {
        match self.focus {
            Focus::PatientChat => self.consult.patient_suggestions.len(),
            Focus::DoctorChat => self.consult.doctor_suggestions.len(),
            Focus::PatientFeedback if self.consult.is_collecting_background() => 0,
            Focus::PatientFeedback => self.consult.patient_feedback.suggestions.len(),
            Focus::DoctorFeedback => self.consult.doctor_feedback.suggestions.len(),
            Focus::DemoQuestions => self.demo.visible_questions().len(),
            Focus::Diagnosis | Focus::DemoChat => 0,
        }
    }

    /// Spinner frame index for an animation with `frames` frames
    pub fn spinner_index(&self, frames: usize) -> usize {
        (self.spinner_frame / TICKS_PER_SPINNER_FRAME) % frames.max(1)
    }

    /// Highlighted row, if it still points at an existing row
    pub fn valid_highlight(&self) -> Option<usize> {
        self.highlight.filter(|i| *i < self.focused_row_count())
    }
}
