//! Message processing
//!
//! Runs a message through the TEA update loop, following chained messages
//! and dispatching any actions to background tasks.

use std::sync::Arc;

use chatbox_api::AskBackend;
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: AskBackend + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(backend));
        }

        msg = result.message;
    }
}
