//! HTTP Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use advisor_core::{AdvisorError, IntakeDraft, IntakeForm, IntakeRecord, Message, SessionId};

use crate::error::ApiError;
use crate::sessions::SessionView;
use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub active_sessions: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub submitted: bool,
    pub delivered: bool,
    pub record: IntakeRecord,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OpenSessionRequest {
    pub context: Option<IntakeRecord>,
}

#[derive(Debug, Deserialize)]
pub struct AccessKeyRequest {
    pub access_key: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub reply: Message,
    pub session: SessionView,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        active_sessions: state.sessions.len().await,
    })
}

/// Validate and relay an intake submission.
///
/// A relay failure still answers `submitted: true`; `delivered` tells the
/// two cases apart.
pub async fn submit_intake(
    State(state): State<AppState>,
    Json(draft): Json<IntakeDraft>,
) -> Result<Json<IntakeResponse>, ApiError> {
    let mut form = IntakeForm::with_draft(draft);
    let outcome = form.submit(state.relay.as_ref()).await?;

    let record = form
        .handoff()
        .cloned()
        .ok_or_else(|| AdvisorError::Other("submitted form has no record".into()))?;

    Ok(Json(IntakeResponse {
        submitted: true,
        delivered: outcome.delivered,
        record,
    }))
}

/// Open a brainstorm session, optionally seeded with intake context.
/// Send `{}` to open one without context.
pub async fn open_session(
    State(state): State<AppState>,
    Json(payload): Json<OpenSessionRequest>,
) -> (StatusCode, Json<SessionView>) {
    let view = state.sessions.open(payload.context).await;
    (StatusCode::CREATED, Json(view))
}

/// Current state of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state.sessions.view(&SessionId::from_string(id)).await?;
    Ok(Json(view))
}

/// Satisfy the access-key gate
pub async fn submit_access_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AccessKeyRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state
        .sessions
        .unlock(&SessionId::from_string(id), &payload.access_key)
        .await?;
    Ok(Json(view))
}

/// Send a message and wait for the reply.
///
/// The reply is fetched and recorded on its own task, so the exchange
/// completes even if the client goes away mid-reply.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let id = SessionId::from_string(id);
    let pending = state.sessions.begin_exchange(&id, &payload.message).await?;

    let provider = Arc::clone(&state.provider);
    let sessions = Arc::clone(&state.sessions);
    let exchange = tokio::spawn(async move {
        let reply = pending.fetch_reply(provider.as_ref()).await;
        sessions.complete_exchange(&id, pending, reply).await
    });

    let (reply, session) = exchange
        .await
        .map_err(|e| AdvisorError::Other(format!("exchange task failed: {e}")))??;

    Ok(Json(SendMessageResponse { reply, session }))
}

/// Close a session when its view is left
pub async fn close_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.sessions.close(&SessionId::from_string(id)).await;
    StatusCode::NO_CONTENT
}
