//! # chatbox-api - Backend Protocol and Client
//!
//! Request/reply types for the `/api/ask` endpoint and the HTTP client that
//! talks to it.
//!
//! Depends on [`chatbox_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Protocol (`protocol`)
//! - [`ConsultRequest`] / [`ConsultReply`] - Two-party doctor/patient turns
//! - [`DemoRequest`] / [`DemoReply`] - Single-user demo turns
//! - [`ClarificationMap`] - Last-known `question_to_clarify` payload
//!
//! ### Client (`client`)
//! - [`AskBackend`] - Async trait the app dispatches requests through
//! - [`HttpBackend`] - reqwest implementation posting JSON to the endpoint

pub mod client;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{AskBackend, HttpBackend, LocalAskBackend, DEFAULT_ENDPOINT};
pub use protocol::{
    values_of, ClarificationItem, ClarificationMap, ConsultReply, ConsultRequest, DemoReply,
    DemoRequest,
};
