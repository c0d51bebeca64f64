//! Thumbs up/down feedback on a set of AI suggestions

use serde::Serialize;
use std::collections::BTreeMap;

/// Ratings and a free-text comment for one suggestion set.
///
/// `ratings` maps the suggestion number to `Some(true)` (thumbs up),
/// `Some(false)` (thumbs down) or `None` (unrated). Numbers are 1-based
/// positions for patient answers and the server's question number for
/// doctor questions; in both cases ascending key order follows display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback<S> {
    pub suggestions: Vec<S>,
    pub comment: String,
    pub ratings: BTreeMap<u32, Option<bool>>,
}

impl<S> Default for Feedback<S> {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            comment: String::new(),
            ratings: BTreeMap::new(),
        }
    }
}

impl<S> Feedback<S> {
    /// Feedback with no suggestions, no comment and no ratings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh feedback numbering the suggestions 1..=n, all unrated
    pub fn for_suggestions(suggestions: Vec<S>) -> Self {
        let keys = 1..=suggestions.len() as u32;
        Self::keyed(suggestions, keys)
    }

    /// Fresh feedback with explicit rating keys, all unrated
    pub fn keyed(suggestions: Vec<S>, keys: impl IntoIterator<Item = u32>) -> Self {
        Self {
            suggestions,
            comment: String::new(),
            ratings: keys.into_iter().map(|k| (k, None)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn rating(&self, number: u32) -> Option<bool> {
        self.ratings.get(&number).copied().flatten()
    }

    /// Rating key for the suggestion shown at `index`.
    ///
    /// Falls back to the 1-based position when the ratings table is shorter
    /// than the suggestion list.
    pub fn key_at(&self, index: usize) -> u32 {
        self.ratings
            .keys()
            .nth(index)
            .copied()
            .unwrap_or(index as u32 + 1)
    }

    /// Set the rating to `value`, or clear it if it already equals `value`.
    pub fn toggle(&mut self, number: u32, value: bool) {
        let next = if self.rating(number) == Some(value) {
            None
        } else {
            Some(value)
        };
        self.ratings.insert(number, next);
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }
}
