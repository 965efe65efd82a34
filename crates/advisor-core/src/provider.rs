//! Response Provider Strategy
//!
//! Single capability the brainstorm session talks to. The simulated
//! template generator implements it today; a real model backend can
//! replace it without touching [`ConversationSession`](crate::session::ConversationSession).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_core::ResponseProvider;
//!
//! let provider = SimulatedProvider::new(Duration::from_millis(1000));
//! let reply = provider.respond("a marketplace for dog walkers", None).await?;
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::intake::IntakeRecord;

/// Strategy trait for reply generation
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Produce one complete reply to `message`, optionally informed by the
    /// intake context the session was opened with.
    async fn respond(&self, message: &str, context: Option<&IntakeRecord>) -> Result<String>;
}
