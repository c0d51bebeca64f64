//! Per-mode session state
//!
//! - `consult`: two-party doctor/patient consultation
//! - `demo`: single-user chat with question chips

pub mod consult;
pub mod demo;

pub use consult::ConsultSession;
pub use demo::{DemoSession, TERMINAL_REPLY};
