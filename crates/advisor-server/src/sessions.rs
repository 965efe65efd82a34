//! Live brainstorm sessions
//!
//! Holds one `ConversationSession` per open chat view. Nothing here
//! outlives the process. A session is dropped when its view closes, or by
//! the idle sweep when the browser never says goodbye.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use advisor_core::{
    ConversationSession, IntakeRecord, Message, PendingExchange, Result as AdvisorResult,
    SessionId,
};

use crate::error::ApiError;

/// What the browser needs to render a session
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub messages: Vec<Message>,
    pub unlocked: bool,
    pub awaiting_response: bool,
}

impl From<&ConversationSession> for SessionView {
    fn from(session: &ConversationSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            messages: session.messages().to_vec(),
            unlocked: session.is_unlocked(),
            awaiting_response: session.is_awaiting_response(),
        }
    }
}

/// In-memory registry of open sessions
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, ConversationSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, context: Option<IntakeRecord>) -> SessionView {
        let session = ConversationSession::new(context);
        let view = SessionView::from(&session);

        tracing::info!(session = %session.id(), contextual = session.context().is_some(), "session opened");
        self.sessions.write().await.insert(session.id().clone(), session);

        view
    }

    pub async fn view(&self, id: &SessionId) -> Result<SessionView, ApiError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .map(SessionView::from)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))
    }

    pub async fn unlock(&self, id: &SessionId, key: &str) -> Result<SessionView, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;

        session.unlock(key)?;
        Ok(SessionView::from(&*session))
    }

    /// Accept a user message. The lock is released before the caller asks
    /// the provider, so other sessions are never blocked on a reply.
    pub async fn begin_exchange(&self, id: &SessionId, text: &str) -> Result<PendingExchange, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;

        Ok(session.begin_exchange(text)?)
    }

    /// Record the reply. If the view was closed meanwhile the reply is
    /// discarded and `SessionNotFound` is returned.
    pub async fn complete_exchange(
        &self,
        id: &SessionId,
        pending: PendingExchange,
        reply: AdvisorResult<String>,
    ) -> Result<(Message, SessionView), ApiError> {
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.get_mut(id) else {
            tracing::debug!(session = %id, "reply arrived after session closed");
            return Err(ApiError::SessionNotFound(id.to_string()));
        };

        let message = session.complete_exchange(pending, reply)?.clone();
        Ok((message, SessionView::from(&*session)))
    }

    /// Drop a session. Returns whether it existed.
    pub async fn close(&self, id: &SessionId) -> bool {
        let Some(session) = self.sessions.write().await.remove(id) else {
            return false;
        };

        let age = Utc::now() - session.created_at();
        tracing::info!(session = %id, age_secs = age.num_seconds(), "session closed");
        true
    }

    /// Drop every session with no activity for longer than `max_idle`.
    /// Returns how many were removed.
    pub async fn sweep_idle(&self, now: DateTime<Utc>, max_idle: TimeDelta) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, max_idle));
        before - sessions.len()
    }

    /// Run [`Self::sweep_idle`] every `every` until the runtime shuts down
    pub fn spawn_sweeper(self: Arc<Self>, every: Duration, max_idle: Duration) -> JoinHandle<()> {
        let max_idle = TimeDelta::from_std(max_idle).unwrap_or(TimeDelta::MAX);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let removed = self.sweep_idle(Utc::now(), max_idle).await;
                if removed > 0 {
                    tracing::info!(removed, "swept idle sessions");
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_and_close() {
        let registry = SessionRegistry::new();
        let view = registry.open(None).await;
        let id = SessionId::from_string(&view.session_id);

        assert_eq!(view.messages.len(), 1);
        assert_eq!(registry.len().await, 1);
        assert!(registry.close(&id).await);
        assert!(!registry.close(&id).await);
        assert!(matches!(registry.view(&id).await, Err(ApiError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_reply_after_close_is_discarded() {
        let registry = SessionRegistry::new();
        let id = SessionId::from_string(registry.open(None).await.session_id);
        registry.unlock(&id, "0123456789ab").await.unwrap();

        let pending = registry.begin_exchange(&id, "an idea").await.unwrap();
        registry.close(&id).await;

        let result = registry.complete_exchange(&id, pending, Ok("late".into())).await;
        assert!(matches!(result, Err(ApiError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_sweep_removes_only_idle_sessions() {
        let registry = SessionRegistry::new();
        let quiet = SessionId::from_string(registry.open(None).await.session_id);
        let busy = SessionId::from_string(registry.open(None).await.session_id);
        registry.unlock(&busy, "0123456789ab").await.unwrap();
        let _pending = registry.begin_exchange(&busy, "an idea").await.unwrap();

        let max_idle = TimeDelta::minutes(30);
        assert_eq!(registry.sweep_idle(Utc::now(), max_idle).await, 0);

        let later = Utc::now() + TimeDelta::minutes(31);
        assert_eq!(registry.sweep_idle(later, max_idle).await, 1);
        assert!(matches!(registry.view(&quiet).await, Err(ApiError::SessionNotFound(_))));
        assert!(registry.view(&busy).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_task_clears_abandoned_sessions() {
        let registry = Arc::new(SessionRegistry::new());
        registry.open(None).await;

        let sweeper = Arc::clone(&registry).spawn_sweeper(Duration::from_secs(60), Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(registry.len().await, 0);
        sweeper.abort();
    }
}
