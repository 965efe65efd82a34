//! Application State

use std::sync::Arc;

use advisor_core::{IntakeRelay, ResponseProvider};

use crate::sessions::SessionRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Reply generator (simulated today)
    pub provider: Arc<dyn ResponseProvider>,

    /// Outbound delivery for intake submissions
    pub relay: Arc<dyn IntakeRelay>,

    /// Brainstorm sessions for currently open chat views
    pub sessions: Arc<SessionRegistry>,
}
