//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use chatbox_api::{AskBackend, HttpBackend};
use chatbox_app::config::Settings;
use chatbox_app::process::process_message;
use chatbox_app::{AppState, Message};
use chatbox_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI against the configured backend until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    let backend = Arc::new(
        HttpBackend::new(&settings.backend.endpoint).context("Cannot start without a backend")?,
    );
    info!(
        "Starting {} session against {}",
        settings.session.mode,
        backend.endpoint()
    );

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse() {
        warn!("Mouse hover unavailable: {e}");
    }

    let mut state = AppState::with_settings(settings);

    // Replies from background tasks come back through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, backend);

    terminal::disable_mouse();
    ratatui::restore();
    info!("chatbox exiting");

    result
}

/// Main event loop
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
) -> Result<()>
where
    B: AskBackend + Send + Sync + 'static,
{
    let mut regions = render::HitRegions::default();

    while !state.should_quit() {
        // Process replies from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &backend);
        }

        // Render
        terminal.draw(|frame| regions = render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(&regions)? {
            process_message(state, message, &msg_tx, &backend);
        }
    }

    Ok(())
}
