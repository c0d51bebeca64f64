//! Diagnosis pane: the top candidates as cards, with a detail popover for
//! the hovered card.

use chatbox_core::{Diagnosis, DiagnosisEntry};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::layout::popover_area;
use crate::theme::styles;

use super::{wrap_text, RatingCircle, NO_CONTENT};

const PANEL_TITLE: &str = "Potential diagnoses";

/// Popover size limits
const POPOVER_MAX_WIDTH: u16 = 48;
const POPOVER_MAX_HEIGHT: u16 = 12;

/// Areas of `count` cards laid side by side inside the pane at `panel`.
///
/// The renderer and the mouse hit-test both use this, so a hover always
/// lands on the card that is drawn there.
pub fn card_areas(panel: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let inner = styles::glass_block(false).inner(panel);
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::horizontal(constraints).split(inner).to_vec()
}

fn display_name<'e>(key: &'e str, entry: &'e DiagnosisEntry) -> &'e str {
    if entry.name.is_empty() {
        key
    } else {
        &entry.name
    }
}

pub struct DiagnosisPanel<'a> {
    diagnosis: Option<&'a Diagnosis>,
    hovered: Option<usize>,
    focused: bool,
}

impl<'a> DiagnosisPanel<'a> {
    pub fn new(diagnosis: Option<&'a Diagnosis>) -> Self {
        Self {
            diagnosis,
            hovered: None,
            focused: false,
        }
    }

    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_card(key: &str, entry: &DiagnosisEntry, hovered: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(hovered);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![Line::from(RatingCircle::new(entry.rating).span())];
        lines.extend(
            wrap_text(display_name(key, entry), inner.width as usize)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_primary().add_modifier(Modifier::BOLD))),
        );
        if !entry.link.is_empty() {
            lines.push(Line::styled(entry.link.clone(), styles::text_muted()));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for DiagnosisPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card(PANEL_TITLE, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.diagnosis {
            None => {
                Paragraph::new(Line::styled(NO_CONTENT, styles::text_muted())).render(inner, buf);
            }
            Some(Diagnosis::Text(text)) => {
                let lines: Vec<Line> = wrap_text(text, inner.width as usize)
                    .into_iter()
                    .map(|l| Line::styled(l, styles::text_primary()))
                    .collect();
                Paragraph::new(lines).render(inner, buf);
            }
            Some(Diagnosis::Ranked(map)) if map.is_empty() => {
                Paragraph::new(Line::styled(NO_CONTENT, styles::text_muted())).render(inner, buf);
            }
            Some(Diagnosis::Ranked(map)) => {
                let entries: Vec<_> = map.visible().collect();
                let cards = card_areas(area, entries.len());
                for (i, ((key, entry), card)) in entries.into_iter().zip(cards).enumerate() {
                    Self::render_card(key, entry, self.hovered == Some(i), card, buf);
                }
            }
        }
    }
}

/// Detail box for one diagnosis: rating, justification and link
pub struct DiagnosisPopover<'a> {
    key: &'a str,
    entry: &'a DiagnosisEntry,
}

impl<'a> DiagnosisPopover<'a> {
    pub fn new(key: &'a str, entry: &'a DiagnosisEntry) -> Self {
        Self { key, entry }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Rating ", styles::text_secondary()),
            RatingCircle::new(self.entry.rating).span(),
        ])];
        let justification = if self.entry.justification.is_empty() {
            "No justification given"
        } else {
            self.entry.justification.as_str()
        };
        lines.extend(
            wrap_text(justification, width)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_primary())),
        );
        if !self.entry.link.is_empty() {
            lines.push(Line::styled(
                self.entry.link.clone(),
                styles::accent().add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines
    }

    /// Where the popover goes for a pointer (or card corner) at `anchor`
    pub fn area(&self, screen: Rect, anchor: (u16, u16)) -> Rect {
        let width = POPOVER_MAX_WIDTH.min(screen.width);
        let content_rows = self.lines(width.saturating_sub(2) as usize).len() as u16;
        let height = (content_rows + 2).min(POPOVER_MAX_HEIGHT);
        popover_area(screen, anchor, width, height)
    }
}

impl Widget for DiagnosisPopover<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popover_block(display_name(self.key, self.entry));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }
        Paragraph::new(self.lines(inner.width as usize)).render(inner, buf);
    }
}
