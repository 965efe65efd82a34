//! # advisor-core
//!
//! Domain core for the startup advisor: the intake form, the brainstorm
//! conversation session and the response provider abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  handoff   ┌───────────────────────┐
//! │  IntakeForm  │───────────▶│  ConversationSession  │
//! │  (validate)  │ IntakeRecord│  (gate, exchanges)    │
//! └──────┬───────┘            └───────────┬───────────┘
//!        │ IntakeRelay                    │ ResponseProvider
//!        ▼                                ▼
//!   third-party form relay        simulated / real backend
//! ```
//!
//! The `ResponseProvider` trait lets the simulated template generator be
//! swapped for a real model without changing the session contract.

pub mod error;
pub mod intake;
pub mod message;
pub mod provider;
pub mod relay;
pub mod session;
pub mod text;
pub mod welcome;

pub use error::{AdvisorError, Result};
pub use intake::{
    FieldError, FormState, IntakeDraft, IntakeField, IntakeForm, IntakeRecord,
    SubmissionOutcome, ValidationErrors,
};
pub use message::{Conversation, Message, Role};
pub use provider::ResponseProvider;
pub use relay::IntakeRelay;
pub use session::{ConversationSession, PendingExchange, SessionId};
