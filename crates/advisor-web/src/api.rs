//! API Client

use serde::{de::DeserializeOwned, Deserialize};

use advisor_core::{IntakeDraft, IntakeRecord, Message};

/// Intake submission result
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub submitted: bool,
    pub delivered: bool,
    pub record: IntakeRecord,
}

/// Server-side view of a brainstorm session
#[derive(Clone, Debug, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    pub messages: Vec<Message>,
    pub unlocked: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SendMessageResponse {
    pub session: SessionView,
}

/// Absolute URL for an API path; reqwest needs one in the browser too
pub fn api_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Request failed").to_string())
    }
}

async fn post_json<T: DeserializeOwned>(path: &str, body: &serde_json::Value) -> Result<T, String> {
    let response = reqwest::Client::new()
        .post(api_url(&origin(), path))
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    read_json(response).await
}

/// Submit the intake form for relaying
pub async fn submit_intake(draft: &IntakeDraft) -> Result<IntakeResponse, String> {
    let body = serde_json::to_value(draft).map_err(|e| e.to_string())?;
    post_json("/api/intake", &body).await
}

/// Server copy of a session
pub async fn get_session(session_id: &str) -> Result<SessionView, String> {
    let response = reqwest::Client::new()
        .get(api_url(&origin(), &format!("/api/sessions/{session_id}")))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    read_json(response).await
}

/// Open a brainstorm session, passing intake context when there is one
pub async fn open_session(context: Option<&IntakeRecord>) -> Result<SessionView, String> {
    let body = serde_json::json!({ "context": context });
    post_json("/api/sessions", &body).await
}

/// Satisfy the access-key gate
pub async fn submit_access_key(session_id: &str, key: &str) -> Result<SessionView, String> {
    let body = serde_json::json!({ "access_key": key });
    post_json(&format!("/api/sessions/{session_id}/access-key"), &body).await
}

/// Send a chat message and wait for the reply
pub async fn send_message(session_id: &str, message: &str) -> Result<SendMessageResponse, String> {
    let body = serde_json::json!({ "message": message });
    post_json(&format!("/api/sessions/{session_id}/messages"), &body).await
}

/// Close the session when the brainstorm view goes away
pub async fn close_session(session_id: &str) -> Result<(), String> {
    reqwest::Client::new()
        .delete(api_url(&origin(), &format!("/api/sessions/{session_id}")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_cleanly() {
        assert_eq!(api_url("http://localhost:3000", "/api/intake"), "http://localhost:3000/api/intake");
        assert_eq!(api_url("https://startup.ai/", "/health"), "https://startup.ai/health");
    }

    #[test]
    fn test_session_view_parses_server_shape() {
        let json = r#"{"session_id":"abc","messages":[{"role":"assistant","content":"Hello!","timestamp":"2024-01-01T00:00:00Z"}],"unlocked":false,"awaiting_response":false}"#;
        let view: SessionView = serde_json::from_str(json).unwrap();
        assert_eq!(view.messages.len(), 1);
        assert!(!view.unlocked);
    }
}
