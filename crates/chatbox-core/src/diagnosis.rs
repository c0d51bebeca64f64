//! # Diagnosis Domain Types
//!
//! Candidate diagnoses arrive as a JSON object keyed by an opaque id. Order
//! matters (only the first three are shown), so entries are kept as an
//! ordered list rather than a hash map. The final turn of a conversation may
//! instead carry a plain-text diagnosis.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{display_value, is_truthy};

/// Number of candidates shown in the diagnosis pane
pub const VISIBLE_DIAGNOSES: usize = 3;

// ── DiagnosisEntry ────────────────────────────────────────────────────────────

/// A single ranked diagnosis candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisEntry {
    pub name: String,
    /// Reference URL for the condition
    pub link: String,
    pub justification: String,
    /// Confidence on a 1-10 scale. Missing or non-numeric ratings read as 1.
    pub rating: f64,
}

impl DiagnosisEntry {
    /// Build an entry from one value of the diagnosis object.
    ///
    /// Every field is optional on the wire; absent text fields become empty
    /// strings. A bare string value is treated as the candidate's name.
    pub fn from_value(value: &Value) -> Self {
        let text = |field: &str| value.get(field).and_then(display_value).unwrap_or_default();

        match value {
            Value::Object(_) => Self {
                name: text("name"),
                link: text("link"),
                justification: text("justification"),
                rating: value.get("rating").and_then(parse_rating).unwrap_or(1.0),
            },
            other => Self {
                name: display_value(other).unwrap_or_default(),
                link: String::new(),
                justification: String::new(),
                rating: 1.0,
            },
        }
    }
}

fn parse_rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ── DiagnosisMap ──────────────────────────────────────────────────────────────

/// Insertion-ordered map of diagnosis id to entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosisMap {
    entries: Vec<(String, DiagnosisEntry)>,
}

impl DiagnosisMap {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            entries: object
                .iter()
                .map(|(key, value)| (key.clone(), DiagnosisEntry::from_value(value)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&DiagnosisEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiagnosisEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// The first `n` entries in server order
    pub fn top(&self, n: usize) -> impl Iterator<Item = (&str, &DiagnosisEntry)> {
        self.iter().take(n)
    }

    /// The entries the diagnosis pane actually shows
    pub fn visible(&self) -> impl Iterator<Item = (&str, &DiagnosisEntry)> {
        self.top(VISIBLE_DIAGNOSES)
    }
}

impl FromIterator<(String, DiagnosisEntry)> for DiagnosisMap {
    fn from_iter<I: IntoIterator<Item = (String, DiagnosisEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for DiagnosisMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

// ── Diagnosis ─────────────────────────────────────────────────────────────────

/// What the server currently believes is wrong with the patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Diagnosis {
    /// Ranked candidates keyed by id
    Ranked(DiagnosisMap),
    /// Free-text diagnosis from the final turn
    Text(String),
}

impl Diagnosis {
    /// Parse a `diagnosis` reply field. Falsy values mean "no diagnosis".
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_truthy(value) {
            return None;
        }
        match value {
            Value::Object(object) => Some(Self::Ranked(DiagnosisMap::from_object(object))),
            other => display_value(other).map(Self::Text),
        }
    }

    /// Whether the pane has anything to show
    pub fn has_content(&self) -> bool {
        match self {
            Diagnosis::Ranked(map) => !map.is_empty(),
            Diagnosis::Text(text) => !text.trim().is_empty(),
        }
    }
}

// ── ConsultationHistory ───────────────────────────────────────────────────────

/// Running health-issue summary shown beside the diagnosis pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConsultationHistory {
    Text(String),
    /// Summary that carries its own ranked diagnosis list
    Structured(DiagnosisMap),
}

impl ConsultationHistory {
    /// Parse a summary field. Falsy values mean "no summary".
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_truthy(value) {
            return None;
        }
        match value.get("diagnosis") {
            Some(Value::Object(object)) => Some(Self::Structured(DiagnosisMap::from_object(object))),
            _ => display_value(value).map(Self::Text),
        }
    }
}
