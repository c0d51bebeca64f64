//! Screen layout definitions for the TUI
//!
//! Both modes share a header, a one-row loading bar under it and a
//! one-row status line at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the consultation view
#[derive(Debug, Clone, Copy)]
pub struct ConsultAreas {
    pub header: Rect,
    pub loading: Rect,
    pub patient_feedback: Rect,
    pub patient_chat: Rect,
    pub doctor_chat: Rect,
    pub doctor_feedback: Rect,
    pub history: Rect,
    pub diagnosis: Rect,
    pub status: Rect,
}

/// Screen areas for the demo view
#[derive(Debug, Clone, Copy)]
pub struct DemoAreas {
    pub header: Rect,
    pub loading: Rect,
    pub chat: Rect,
    pub medical_history: Rect,
    pub diagnoses: Rect,
    pub status: Rect,
}

/// Split off the rows every mode has: header, loading, body, status
fn frame_rows(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Four chat/feedback columns over a history | diagnosis row
pub fn consult(area: Rect) -> ConsultAreas {
    let [header, loading, body, status] = frame_rows(area);

    let [columns, bottom] =
        Layout::vertical([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(body);

    let [patient_feedback, patient_chat, doctor_chat, doctor_feedback] = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(20),
    ])
    .areas(columns);

    let [history, diagnosis] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(bottom);

    ConsultAreas {
        header,
        loading,
        patient_feedback,
        patient_chat,
        doctor_chat,
        doctor_feedback,
        history,
        diagnosis,
        status,
    }
}

/// Chat on the left, medical history over potential diagnoses on the right
pub fn demo(area: Rect) -> DemoAreas {
    let [header, loading, body, status] = frame_rows(area);

    let [chat, side] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(body);
    let [medical_history, diagnoses] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(side);

    DemoAreas {
        header,
        loading,
        chat,
        medical_history,
        diagnoses,
        status,
    }
}

/// Place a `width` x `height` box near `anchor`, kept inside `screen`.
///
/// The box opens above the anchor when there is room (the diagnosis row
/// sits at the bottom of the screen), otherwise below it.
pub fn popover_area(screen: Rect, anchor: (u16, u16), width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let (ax, ay) = anchor;

    let max_x = screen.right().saturating_sub(width);
    let x = ax.clamp(screen.x, max_x.max(screen.x));

    let y = if ay >= screen.y + height {
        ay - height
    } else {
        (ay + 1).min(screen.bottom().saturating_sub(height))
    };

    Rect::new(x, y.max(screen.y), width, height)
}
