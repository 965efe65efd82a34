//! # advisor-runtime
//!
//! Runtime providers and integrations for the startup advisor.
//!
//! ## Integrations
//!
//! - **Simulated** (default): template replies behind an artificial delay
//! - **Form relay**: multipart POST of intake submissions to a third-party
//!   form-forwarding service
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::{FormRelayClient, SimulatedProvider};
//!
//! let provider = Arc::new(SimulatedProvider::from_env());
//! let relay = Arc::new(FormRelayClient::from_env()?);
//! ```

pub mod form_relay;
#[cfg(feature = "simulated")]
pub mod simulated;

pub use form_relay::{FormRelayClient, FormRelayConfig};
#[cfg(feature = "simulated")]
pub use simulated::{SimulatedConfig, SimulatedProvider};

// Re-export core types for convenience
pub use advisor_core::{
    AdvisorError, ConversationSession, IntakeRecord, IntakeRelay, Message, ResponseProvider,
    Result, Role,
};
