//! Single-line text buffer with a character cursor.

/// An edit applied to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}

/// Text being typed into a pane. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Replace the contents, leaving the cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn apply(&mut self, op: EditOp) {
        let len = self.text.chars().count();
        match op {
            EditOp::Insert(c) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            EditOp::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
            }
            EditOp::Delete => {
                if self.cursor < len {
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
            }
            EditOp::Left => self.cursor = self.cursor.saturating_sub(1),
            EditOp::Right => self.cursor = (self.cursor + 1).min(len),
            EditOp::Home => self.cursor = 0,
            EditOp::End => self.cursor = len,
            EditOp::Clear => self.clear(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Apply an edit to a plain string whose cursor is always at the end.
///
/// Used for feedback comments, where Left/Right are bound to ratings.
pub fn edit_at_end(text: &mut String, op: EditOp) {
    match op {
        EditOp::Insert(c) => text.push(c),
        EditOp::Backspace => {
            text.pop();
        }
        EditOp::Clear => text.clear(),
        EditOp::Delete | EditOp::Left | EditOp::Right | EditOp::Home | EditOp::End => {}
    }
}
