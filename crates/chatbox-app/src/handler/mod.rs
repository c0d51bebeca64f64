//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused pane
//! - `consult`: Two-party send, reply, selection and feedback handlers
//! - `demo`: Demo chat handlers

pub(crate) mod consult;
pub(crate) mod demo;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use chatbox_api::{ConsultRequest, DemoRequest};

use crate::data_collection::SnapshotRecord;
use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send a consultation turn to the backend
    AskConsult(ConsultRequest),

    /// Send a demo turn to the backend
    AskDemo(DemoRequest),

    /// Append a snapshot line to the data-collection file
    RecordSnapshot {
        path: PathBuf,
        record: SnapshotRecord,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action` and then process `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
