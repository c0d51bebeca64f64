//! Widget components for the TUI

mod chat_panel;
mod demo_side;
mod diagnosis;
mod feedback_panel;
mod header;
mod history;
mod input_line;
mod loading;
mod rating_circle;
mod status_line;

pub use chat_panel::{ChatPanel, Speaker};
pub use demo_side::ListCard;
pub use diagnosis::{card_areas, DiagnosisPanel, DiagnosisPopover};
pub use feedback_panel::{FeedbackPanel, Suggestion};
pub use header::MainHeader;
pub use history::HistoryPanel;
pub use input_line::InputLine;
pub use loading::{LoadingBar, SPINNER_FRAMES};
pub use rating_circle::RatingCircle;
pub use status_line::StatusLine;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder for a pane whose backend field is empty or absent
pub const NO_CONTENT: &str = "No Content";

/// Word-wrap `text` to `width` terminal columns.
///
/// Explicit newlines are kept (blank lines included); words wider than a
/// whole line are split by character.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in raw.split_whitespace() {
            let word_width = word.width();
            let needed = if line.is_empty() {
                word_width
            } else {
                line_width + 1 + word_width
            };

            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                    line_width += 1;
                }
                line.push_str(word);
                line_width += word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        lines.push(line);
    }

    lines
}

/// Keep the last `height` items, so the newest content stays in view
pub(crate) fn tail<T>(items: Vec<T>, height: usize) -> Vec<T> {
    let skip = items.len().saturating_sub(height);
    items.into_iter().skip(skip).collect()
}
