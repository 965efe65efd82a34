//! Session Management
//!
//! A brainstorm conversation: welcome message, access-key gate, and the
//! user/assistant exchange loop. Lives only as long as the chat view.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AdvisorError, Result};
use crate::intake::IntakeRecord;
use crate::message::{Conversation, Message};
use crate::provider::ResponseProvider;
use crate::welcome::{welcome_message, APOLOGY};

/// Keys must be strictly longer than this to open the gate.
pub const MIN_ACCESS_KEY_CHARS: usize = 10;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a candidate access key. Any key longer than
/// [`MIN_ACCESS_KEY_CHARS`] characters is accepted.
pub fn accepts_access_key(key: &str) -> bool {
    key.chars().count() > MIN_ACCESS_KEY_CHARS
}

/// A user message that has been accepted and is waiting for its reply.
///
/// Produced by [`ConversationSession::begin_exchange`] and consumed by
/// [`ConversationSession::complete_exchange`], so the provider call can run
/// without holding the session.
#[derive(Debug)]
pub struct PendingExchange {
    session_id: SessionId,
    message: String,
    context: Option<IntakeRecord>,
}

impl PendingExchange {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> Option<&IntakeRecord> {
        self.context.as_ref()
    }

    /// Ask the provider for the reply to this exchange
    pub async fn fetch_reply(&self, provider: &dyn ResponseProvider) -> Result<String> {
        provider.respond(&self.message, self.context.as_ref()).await
    }
}

/// A brainstorm conversation
#[derive(Clone, Debug)]
pub struct ConversationSession {
    id: SessionId,
    conversation: Conversation,
    context: Option<IntakeRecord>,
    unlocked: bool,
    awaiting_response: bool,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl ConversationSession {
    /// Open a session, seeding it with a welcome message built from the
    /// optional intake context.
    pub fn new(context: Option<IntakeRecord>) -> Self {
        let mut conversation = Conversation::new();
        conversation.push(Message::assistant(welcome_message(context.as_ref())));

        let now = Utc::now();
        Self {
            id: SessionId::new(),
            conversation,
            context,
            unlocked: false,
            awaiting_response: false,
            created_at: now,
            last_activity: now,
        }
    }

    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn message_count(&self) -> usize {
        self.conversation.messages().len()
    }

    pub const fn context(&self) -> Option<&IntakeRecord> {
        self.context.as_ref()
    }

    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub const fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last time the gate or the conversation changed
    pub const fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Whether at least `max_idle` has passed since the last activity. A
    /// session with a reply in flight is never idle.
    pub fn is_idle(&self, now: DateTime<Utc>, max_idle: TimeDelta) -> bool {
        !self.awaiting_response && now - self.last_activity >= max_idle
    }

    /// Try to satisfy the access-key gate. A rejected key leaves the gate
    /// as it was.
    pub fn unlock(&mut self, key: &str) -> Result<()> {
        if !accepts_access_key(key) {
            return Err(AdvisorError::AccessKeyRejected(MIN_ACCESS_KEY_CHARS));
        }
        self.unlocked = true;
        self.last_activity = Utc::now();
        tracing::debug!(session = %self.id, "access key accepted");
        Ok(())
    }

    /// Accept a user message: append it and mark the session as awaiting.
    ///
    /// Rejects empty text, a locked gate, or a reply already in flight,
    /// without touching the conversation.
    pub fn begin_exchange(&mut self, text: &str) -> Result<PendingExchange> {
        if text.trim().is_empty() {
            return Err(AdvisorError::EmptyMessage);
        }
        if !self.unlocked {
            return Err(AdvisorError::AccessKeyRequired);
        }
        if self.awaiting_response {
            return Err(AdvisorError::AwaitingResponse);
        }

        self.conversation.push(Message::user(text));
        self.awaiting_response = true;
        self.last_activity = Utc::now();

        Ok(PendingExchange {
            session_id: self.id.clone(),
            message: text.to_string(),
            context: self.context.clone(),
        })
    }

    /// Append the reply for `pending`, or the apology if the provider
    /// failed, and clear the awaiting flag.
    pub fn complete_exchange(
        &mut self,
        pending: PendingExchange,
        reply: Result<String>,
    ) -> Result<&Message> {
        if pending.session_id != self.id || !self.awaiting_response {
            return Err(AdvisorError::Session(format!(
                "no exchange pending for session {}",
                pending.session_id
            )));
        }

        let content = reply.unwrap_or_else(|e| {
            tracing::error!(session = %self.id, "Error fetching AI response: {}", e);
            APOLOGY.to_string()
        });

        self.awaiting_response = false;
        self.last_activity = Utc::now();
        Ok(self.conversation.push(Message::assistant(content)))
    }

    /// Full exchange in one call: accept, ask the provider, append the reply.
    pub async fn submit_message(
        &mut self,
        text: &str,
        provider: &dyn ResponseProvider,
    ) -> Result<&Message> {
        let pending = self.begin_exchange(text)?;
        let reply = pending.fetch_reply(provider).await;
        self.complete_exchange(pending, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::IntakeDraft;
    use crate::message::Role;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResponseProvider for StubProvider {
        async fn respond(&self, message: &str, context: Option<&IntakeRecord>) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let company = context.map_or("your startup", IntakeRecord::company_name);
            Ok(format!("On {message} for {company}"))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ResponseProvider for FailingProvider {
        async fn respond(&self, _message: &str, _context: Option<&IntakeRecord>) -> Result<String> {
            Err(AdvisorError::ProviderUnavailable("timeout".into()))
        }
    }

    fn acme() -> IntakeRecord {
        IntakeDraft {
            name: "Ada".into(),
            email: "ada@acme.io".into(),
            company_name: "Acme".into(),
            industry: "FinTech".into(),
            description: "Payments for tiny shops".into(),
            stage: "Seed".into(),
            challenges: String::new(),
        }
        .validate()
        .unwrap()
    }

    fn unlocked(context: Option<IntakeRecord>) -> ConversationSession {
        let mut session = ConversationSession::new(context);
        session.unlock("sk-0123456789").unwrap();
        session
    }

    #[test]
    fn test_new_session_has_welcome() {
        let session = ConversationSession::new(None);
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert!(!session.is_awaiting_response());
        assert!(!session.is_unlocked());
    }

    #[test]
    fn test_access_key_boundary() {
        let mut session = ConversationSession::new(None);
        assert!(matches!(
            session.unlock("0123456789"),
            Err(AdvisorError::AccessKeyRejected(10))
        ));
        assert!(!session.is_unlocked());

        session.unlock("0123456789a").unwrap();
        assert!(session.is_unlocked());
    }

    #[tokio::test]
    async fn test_locked_gate_refuses_submission() {
        let provider = StubProvider::default();
        let mut session = ConversationSession::new(None);

        let result = session.submit_message("hello there", &provider).await;

        assert!(matches!(result, Err(AdvisorError::AccessKeyRequired)));
        assert_eq!(session.message_count(), 1);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_message_not_appended() {
        let provider = StubProvider::default();
        let mut session = unlocked(None);

        for text in ["", "   "] {
            let result = session.submit_message(text, &provider).await;
            assert!(matches!(result, Err(AdvisorError::EmptyMessage)));
        }

        assert_eq!(session.message_count(), 1);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_each_exchange_adds_two_messages() {
        let provider = StubProvider::default();
        let mut session = unlocked(Some(acme()));

        for (i, text) in ["pricing ideas", "go to market", "hiring"].iter().enumerate() {
            let reply = session.submit_message(text, &provider).await.unwrap();
            assert_eq!(reply.role, Role::Assistant);
            assert_eq!(reply.content, format!("On {text} for Acme"));
            assert_eq!(session.message_count(), 1 + 2 * (i + 1));
        }

        let roles: Vec<_> = session.messages()[1..].iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [Role::User, Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_provider_failure_appends_apology() {
        let mut session = unlocked(None);

        let reply = session.submit_message("will this work", &FailingProvider).await.unwrap();

        assert_eq!(reply.content, APOLOGY);
        assert_eq!(session.message_count(), 3);
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_awaiting_flag_spans_exchange() {
        let mut session = unlocked(None);

        let pending = session.begin_exchange("first idea").unwrap();
        assert!(session.is_awaiting_response());
        assert_eq!(pending.message(), "first idea");

        assert!(matches!(
            session.begin_exchange("second idea"),
            Err(AdvisorError::AwaitingResponse)
        ));
        assert_eq!(session.message_count(), 2);

        session.complete_exchange(pending, Ok("reply".into())).unwrap();
        assert!(!session.is_awaiting_response());
        assert_eq!(session.message_count(), 3);
    }

    #[test]
    fn test_pending_from_other_session_rejected() {
        let mut first = unlocked(None);
        let mut second = unlocked(None);
        let pending = first.begin_exchange("idea").unwrap();

        assert!(second.complete_exchange(pending, Ok("reply".into())).is_err());
        assert_eq!(second.message_count(), 1);
    }

    #[test]
    fn test_idle_tracks_last_activity() {
        let mut session = unlocked(None);
        let max_idle = TimeDelta::minutes(30);
        let later = session.last_activity() + TimeDelta::minutes(31);

        assert!(!session.is_idle(session.last_activity(), max_idle));
        assert!(session.is_idle(later, max_idle));
        assert!(session.last_activity() >= session.created_at());

        let _pending = session.begin_exchange("still thinking").unwrap();
        assert!(!session.is_idle(later + TimeDelta::hours(1), max_idle));
    }
}
