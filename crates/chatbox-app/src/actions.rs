//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use chatbox_api::AskBackend;
use chatbox_core::ResultExt;
use tokio::sync::mpsc;
use tracing::debug;

use crate::data_collection::append_record;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Network replies come back to the event loop as messages; a closed
/// channel only means the UI already quit.
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: AskBackend + Send + Sync + 'static,
{
    match action {
        UpdateAction::AskConsult(request) => {
            tokio::spawn(async move {
                let message = match backend.consult(request).await {
                    Ok(reply) => Message::ConsultReplied(reply),
                    Err(e) => Message::ConsultFailed {
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(message).await.is_err() {
                    debug!("Consult reply dropped: event loop closed");
                }
            });
        }

        UpdateAction::AskDemo(request) => {
            tokio::spawn(async move {
                let message = match backend.demo(request).await {
                    Ok(reply) => Message::DemoReplied(reply),
                    Err(e) => Message::DemoFailed {
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(message).await.is_err() {
                    debug!("Demo reply dropped: event loop closed");
                }
            });
        }

        UpdateAction::RecordSnapshot { path, record } => {
            // Export failures are logged by the context and never reach the UI
            tokio::spawn(async move {
                let _ = append_record(&path, &record)
                    .await
                    .with_context(|| format!("Failed to record snapshot to {}", path.display()));
            });
        }
    }
}
