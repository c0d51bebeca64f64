//! chatbox-app - Application state and orchestration for chatbox
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! consultation and demo chat sessions: one `AppState`, typed `Message`
//! intents, a pure-ish `update()` and background actions for the network
//! calls. Configuration loading and the data-collection export live here too.

pub mod actions;
pub mod config;
pub mod data_collection;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod session;
pub mod state;
pub mod text_input;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, DiagnosisHover, FeedbackPanel, Focus};
