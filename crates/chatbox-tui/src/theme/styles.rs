//! Semantic style builders for the chat panes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - used for the highlighted row in the focused pane
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Suggestion chip: highlighted wins over selected
pub fn chip(highlighted: bool, selected: bool) -> Style {
    if highlighted {
        focused_selected()
    } else if selected {
        accent_bold().add_modifier(Modifier::UNDERLINED)
    } else {
        accent()
    }
}

/// Speaker label style for a chat line
pub fn speaker(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Thumbs glyph and style for one side of a rating.
///
/// `positive` selects the up or down thumb; it lights up when `rating`
/// matches it.
pub fn thumb(rating: Option<bool>, positive: bool) -> (&'static str, Style) {
    match (positive, rating == Some(positive)) {
        (true, true) => ("▲", Style::default().fg(palette::STATUS_GREEN)),
        (true, false) => ("△", text_muted()),
        (false, true) => ("▼", Style::default().fg(palette::STATUS_RED)),
        (false, false) => ("▽", text_muted()),
    }
}

/// Rating badge color
pub fn rating((r, g, b): (u8, u8, u8)) -> Style {
    Style::default()
        .fg(Color::Rgb(r, g, b))
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Rounded card with a title in the top border
pub fn card(title: &str, focused: bool) -> Block<'_> {
    let title_style = if focused { accent_bold() } else { text_secondary() };
    glass_block(focused)
        .title(Line::styled(format!(" {title} "), title_style))
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn popover_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Line::styled(format!(" {title} "), accent_bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
