//! # Consultation Domain Types
//!
//! Shared vocabulary between:
//! - `chatbox-api` (request/reply wire types)
//! - `chatbox-app` (session state and update handlers)
//! - `chatbox-tui` (rendering the chat panes)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ── AppPhase ──────────────────────────────────────────────────────────────────

/// Top-level lifecycle of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ── Participants ──────────────────────────────────────────────────────────────

/// Participant in a two-party consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }
}

/// Participant in the single-user demo chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

// ── ChatMessage ───────────────────────────────────────────────────────────────

/// Millisecond creation timestamp used as the message id
pub type MessageId = i64;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn timestamp_id() -> MessageId {
    chrono::Utc::now().timestamp_millis()
}

/// A single line in a chat pane. Never mutated after creation.
///
/// `A` is the author type: [`Role`] for consultations, [`Sender`] for the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage<A> {
    pub id: MessageId,
    pub content: String,
    #[serde(rename = "role")]
    pub author: A,
}

impl<A> ChatMessage<A> {
    /// Create a message stamped with the current time
    pub fn new(content: impl Into<String>, author: A) -> Self {
        Self {
            id: timestamp_id(),
            content: content.into(),
            author,
        }
    }
}

impl<A: PartialEq> ChatMessage<A> {
    pub fn is_from(&self, author: &A) -> bool {
        &self.author == author
    }
}

// ── ConversationId ────────────────────────────────────────────────────────────

/// Opaque session token assigned by the server and echoed back on later
/// requests. The client never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub Value);

impl ConversationId {
    /// Adopt a server value unless it is falsy (null, false, 0 or "").
    pub fn from_reply(value: &Value) -> Option<Self> {
        if is_truthy(value) {
            Some(Self(value.clone()))
        } else {
            None
        }
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

// ── ClarifyingQuestion ────────────────────────────────────────────────────────

/// A question the AI proposes the doctor ask next, with canned patient answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifyingQuestion {
    pub question: String,
    /// Numeric key the server filed this question under
    pub number: u32,
    pub selective_answers: Vec<String>,
}

// ── JSON helpers ──────────────────────────────────────────────────────────────

/// Loose truthiness used when the server marks a field as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render an arbitrary JSON value as display text.
///
/// Strings come through verbatim, scalars use their JSON form and
/// containers are rendered as compact JSON. `None` for null.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
