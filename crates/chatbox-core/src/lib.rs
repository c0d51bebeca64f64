//! # chatbox-core - Core Domain Types
//!
//! Foundation crate for chatbox. Provides the consultation domain types,
//! error handling, logging setup and the rating badge math.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ChatMessage`] - A chat line with timestamp id, content and author
//! - [`Role`] - Consultation participant (patient or doctor)
//! - [`Sender`] - Demo chat participant (user or bot)
//! - [`ConversationId`] - Opaque server session token
//! - [`ClarifyingQuestion`] - A numbered question with canned patient answers
//!
//! ### Feedback (`feedback`)
//! - [`Feedback`] - Thumbs ratings plus free-text comment on a suggestion set
//!
//! ### Diagnosis (`diagnosis`)
//! - [`Diagnosis`], [`DiagnosisEntry`], [`DiagnosisMap`] - Ranked candidates or plain text
//! - [`ConsultationHistory`] - Health issue summary shown under the chats
//!
//! ### Rating Badge (`rating`)
//! - [`RatingBadge`] - Clamped rating with hue and sweep for the badge
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod diagnosis;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod prelude;
pub mod rating;
pub mod types;

pub use diagnosis::{ConsultationHistory, Diagnosis, DiagnosisEntry, DiagnosisMap};
pub use error::{Error, Result, ResultExt};
pub use feedback::Feedback;
pub use rating::RatingBadge;
pub use types::{
    display_value, is_truthy, timestamp_id, AppPhase, ChatMessage, ClarifyingQuestion,
    ConversationId, MessageId, Role, Sender,
};
