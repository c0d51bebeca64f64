//! Main render/view function (View in TEA pattern)


use chatbox_app::config::ChatMode;
use chatbox_app::state::{AppState, Focus};
use chatbox_core::{Diagnosis, Role};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Screen regions the mouse can hover, as drawn by the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub diagnosis_cards: Vec<Rect>,
}

impl HitRegions {
    /// Index of the diagnosis card under the cell at `(column, row)`
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.diagnosis_cards
            .iter()
            .position(|card| card.contains(position))
    }
}

/// Human-readable name of a focusable pane
pub fn focus_label(focus: Focus) -> &'static str {
    match focus {
        Focus::PatientFeedback => "Patient feedback",
        Focus::PatientChat => "Patient chat",
        Focus::DoctorChat => "Doctor chat",
        Focus::DoctorFeedback => "Doctor feedback",
        Focus::Diagnosis => "Diagnosis",
        Focus::DemoChat => "Chat",
        Focus::DemoQuestions => "Suggested questions",
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; returns the hover targets it drew so the
/// event poller can hit-test mouse motion against them.
pub fn view(frame: &mut Frame, state: &AppState) -> HitRegions {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    match state.mode {
        ChatMode::Consult => render_consult(frame, state, area),
        ChatMode::Demo => {
            render_demo(frame, state, area);
            HitRegions::default()
        }
    }
}

/// Highlight only shows in the pane that owns it
fn highlight_in(state: &AppState, focus: Focus) -> Option<usize> {
    if state.focus == focus {
        state.valid_highlight()
    } else {
        None
    }
}

fn render_chrome(frame: &mut Frame, state: &AppState, header: Rect, loading: Rect, status: Rect) {
    frame.render_widget(
        widgets::MainHeader::new(state.mode).key_hints(state.settings.ui.show_key_hints),
        header,
    );

    if state.is_loading {
        frame.render_widget(
            widgets::LoadingBar::new(state.spinner_index(widgets::SPINNER_FRAMES.len())),
            loading,
        );
    }

    frame.render_widget(
        widgets::StatusLine::new(state.notice.as_deref(), focus_label(state.focus)),
        status,
    );
}

fn render_consult(frame: &mut Frame, state: &AppState, area: Rect) -> HitRegions {
    let areas = layout::consult(area);
    let session = &state.consult;
    render_chrome(frame, state, areas.header, areas.loading, areas.status);

    // Patient feedback (or the background prompt before the first message)
    let background = session
        .is_collecting_background()
        .then_some(&session.background);
    frame.render_widget(
        widgets::FeedbackPanel::new("Patient feedback", &session.patient_feedback)
            .background(background)
            .highlight(highlight_in(state, Focus::PatientFeedback))
            .focused(state.focus == Focus::PatientFeedback),
        areas.patient_feedback,
    );

    frame.render_widget(
        widgets::ChatPanel::new(Role::Patient.label(), &session.messages, &session.patient_input)
            .chips(session.patient_suggestions.iter().map(String::as_str).collect())
            .highlight(highlight_in(state, Focus::PatientChat))
            .focused(state.focus == Focus::PatientChat),
        areas.patient_chat,
    );

    frame.render_widget(
        widgets::ChatPanel::new(Role::Doctor.label(), &session.messages, &session.doctor_input)
            .chips(
                session
                    .doctor_suggestions
                    .iter()
                    .map(|q| q.question.as_str())
                    .collect(),
            )
            .highlight(highlight_in(state, Focus::DoctorChat))
            .focused(state.focus == Focus::DoctorChat),
        areas.doctor_chat,
    );

    frame.render_widget(
        widgets::FeedbackPanel::new("Doctor feedback", &session.doctor_feedback)
            .highlight(highlight_in(state, Focus::DoctorFeedback))
            .focused(state.focus == Focus::DoctorFeedback),
        areas.doctor_feedback,
    );

    frame.render_widget(
        widgets::HistoryPanel::new(session.history.as_ref()),
        areas.history,
    );

    let hovered = state.hovered_diagnosis;
    frame.render_widget(
        widgets::DiagnosisPanel::new(session.diagnosis.as_ref())
            .hovered(hovered.map(|h| h.index))
            .focused(state.focus == Focus::Diagnosis),
        areas.diagnosis,
    );

    let regions = HitRegions {
        diagnosis_cards: widgets::card_areas(areas.diagnosis, state.visible_diagnosis_count()),
    };

    // Popover last so it draws over everything else
    if let (Some(hover), Some(Diagnosis::Ranked(map))) = (hovered, &session.diagnosis) {
        let entry = map.visible().nth(hover.index);
        let card = regions.diagnosis_cards.get(hover.index);
        if let (Some((key, entry)), Some(card)) = (entry, card) {
            let anchor = hover.anchor.unwrap_or((card.x, card.y));
            let popover = widgets::DiagnosisPopover::new(key, entry);
            let popover_area = popover.area(area, anchor);
            frame.render_widget(popover, popover_area);
        }
    }

    regions
}

fn render_demo(frame: &mut Frame, state: &AppState, area: Rect) {
    let areas = layout::demo(area);
    let demo = &state.demo;
    render_chrome(frame, state, areas.header, areas.loading, areas.status);

    let selected_chip = demo.selected_question.checked_sub(1);
    frame.render_widget(
        widgets::ChatPanel::new("Chat", &demo.messages, &demo.input)
            .chips(demo.visible_questions().iter().map(String::as_str).collect())
            .highlight(highlight_in(state, Focus::DemoQuestions))
            .selected_chip(selected_chip)
            .focused(matches!(state.focus, Focus::DemoChat | Focus::DemoQuestions))
            .placeholder("Describe how you feel"),
        areas.chat,
    );

    frame.render_widget(
        widgets::ListCard::new("Medical history", &demo.medical_history),
        areas.medical_history,
    );
    frame.render_widget(
        widgets::ListCard::new("Potential diagnoses", &demo.potential_diagnoses),
        areas.diagnoses,
    );
}
