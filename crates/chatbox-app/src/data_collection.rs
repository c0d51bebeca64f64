//! Feedback snapshot accumulated during a consultation.
//!
//! The snapshot mirrors the latest messages, feedback, diagnosis and
//! conversation id. Every change is logged at debug under this module's
//! target and, when `[data_collection] path` is configured, appended to a
//! JSON-lines file by a background task.

use std::path::Path;

use chatbox_core::prelude::*;
use chatbox_core::{ChatMessage, ClarifyingQuestion, ConversationId, Diagnosis, Feedback, Role};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

/// Latest interaction state for external analysis. No schema beyond its
/// serialized shape; handlers overwrite it freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub messages: Vec<ChatMessage<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_feedback: Option<Feedback<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_feedback: Option<Feedback<ClarifyingQuestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Diagnosis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
}

impl Snapshot {
    /// Start a fresh snapshot holding a single message
    pub fn starting_with(message: ChatMessage<Role>) -> Self {
        Self {
            messages: vec![message],
            ..Self::default()
        }
    }
}

/// One exported line: the snapshot plus when it was taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRecord {
    pub recorded_at: String,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl SnapshotRecord {
    pub fn now(snapshot: Snapshot) -> Self {
        Self {
            recorded_at: chrono::Local::now().to_rfc3339(),
            snapshot,
        }
    }
}

/// Emit the snapshot to the log at debug level
pub fn log_snapshot(snapshot: &Snapshot) {
    match serde_json::to_string(snapshot) {
        Ok(json) => debug!("dataCollection {json}"),
        Err(e) => warn!("Failed to serialize snapshot: {e}"),
    }
}

/// Append one record to a JSON-lines file, creating it (and its parent
/// directory) on first use.
pub async fn append_record(path: &Path, record: &SnapshotRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
