//! chatbox-tui - Terminal UI for chatbox
//!
//! This crate provides the ratatui-based terminal interface: event polling
//! (keyboard and mouse), the pane layout, widget rendering and the runner
//! that wires an `AppState` to a live `HttpBackend`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::{view, HitRegions};
pub use runner::run;
