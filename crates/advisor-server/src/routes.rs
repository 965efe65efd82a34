//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{
    close_session, get_session, health_check, open_session, send_message, submit_access_key,
    submit_intake,
};
use crate::state::AppState;

/// API routes only
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_check))
        // Intake
        .route("/api/intake", post(submit_intake))
        // Brainstorm sessions
        .route("/api/sessions", post(open_session))
        .route("/api/sessions/{id}", get(get_session).delete(close_session))
        .route("/api/sessions/{id}/access-key", post(submit_access_key))
        .route("/api/sessions/{id}/messages", post(send_message))
        .with_state(state)
}

/// API routes plus the WASM frontend. Unknown paths fall back to
/// `index.html` so client-side routes survive a reload.
pub fn app(state: AppState, static_dir: &str) -> Router {
    let index = format!("{static_dir}/index.html");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_router(state)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use std::time::Duration;

    use advisor_core::{AdvisorError, IntakeRecord, IntakeRelay, Result as AdvisorResult};
    use advisor_runtime::SimulatedProvider;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::sessions::SessionRegistry;

    #[derive(Default)]
    struct StubRelay {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl IntakeRelay for StubRelay {
        async fn deliver(&self, _record: &IntakeRecord) -> AdvisorResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AdvisorError::Relay("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    fn test_app(relay: Arc<StubRelay>) -> Router {
        test_app_with_delay(relay, Duration::ZERO)
    }

    fn test_app_with_delay(relay: Arc<StubRelay>, delay: Duration) -> Router {
        api_router(AppState {
            provider: Arc::new(SimulatedProvider::new(delay)),
            relay,
            sessions: Arc::new(SessionRegistry::new()),
        })
    }

    /// Open a session and unlock it; returns its ID
    async fn open_unlocked(app: &Router) -> String {
        let response = call(app, "POST", "/api/sessions", Some(json!({}))).await;
        let id = json_body(response).await["session_id"].as_str().unwrap().to_string();
        let key_uri = format!("/api/sessions/{id}/access-key");
        let response = call(app, "POST", &key_uri, Some(json!({ "access_key": "0123456789a" }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        id
    }

    fn intake_body() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@acme.io",
            "companyName": "Acme",
            "industry": "FinTech",
            "description": "Payments for tiny shops",
            "stage": "Seed",
            "challenges": ""
        })
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(Arc::default());
        let response = call(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_intake_validation_errors() {
        let relay = Arc::new(StubRelay::default());
        let app = test_app(relay.clone());

        let mut body = intake_body();
        body["email"] = json!("nope");
        body["description"] = json!("short");
        let response = call(&app, "POST", "/api/intake", Some(body)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        let fields: Vec<_> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["email", "description"]);
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_intake_relay_failure_still_submitted() {
        let relay = Arc::new(StubRelay {
            fail: true,
            ..Default::default()
        });
        let app = test_app(relay.clone());

        let response = call(&app, "POST", "/api/intake", Some(intake_body())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["submitted"], true);
        assert_eq!(body["delivered"], false);
        assert_eq!(body["record"]["companyName"], "Acme");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_brainstorm_flow() {
        let app = test_app(Arc::default());

        let response = call(&app, "POST", "/api/sessions", Some(json!({ "context": intake_body() }))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let session = json_body(response).await;
        let id = session["session_id"].as_str().unwrap().to_string();
        let welcome = session["messages"][0]["content"].as_str().unwrap();
        assert!(welcome.contains("Acme"));

        let messages_uri = format!("/api/sessions/{id}/messages");
        let key_uri = format!("/api/sessions/{id}/access-key");

        let response = call(&app, "POST", &messages_uri, Some(json!({ "message": "pricing" }))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await["error"], "Please enter your API key first");

        let response = call(&app, "POST", &key_uri, Some(json!({ "access_key": "0123456789" }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = call(&app, "POST", &key_uri, Some(json!({ "access_key": "0123456789a" }))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = call(&app, "POST", &messages_uri, Some(json!({ "message": "" }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = call(&app, "POST", &messages_uri, Some(json!({ "message": "usage based pricing" }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["reply"]["role"], "assistant");
        assert_eq!(body["session"]["messages"].as_array().unwrap().len(), 3);
        assert_eq!(body["session"]["awaiting_response"], false);

        let response = call(&app, "DELETE", &format!("/api/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = call(&app, "POST", &messages_uri, Some(json!({ "message": "still there?" }))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_session_without_context() {
        let app = test_app(Arc::default());

        let response = call(&app, "POST", "/api/sessions", Some(json!({}))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let session = json_body(response).await;
        assert_eq!(
            session["messages"][0]["content"],
            advisor_core::welcome::GENERIC_WELCOME
        );
    }

    #[tokio::test]
    async fn test_dropped_request_still_completes_exchange() {
        let app = test_app_with_delay(Arc::default(), Duration::from_millis(300));
        let id = open_unlocked(&app).await;
        let messages_uri = format!("/api/sessions/{id}/messages");

        // Client gives up long before the reply is ready
        let abandoned = tokio::time::timeout(
            Duration::from_millis(30),
            call(&app, "POST", &messages_uri, Some(json!({ "message": "idea one" }))),
        )
        .await;
        assert!(abandoned.is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;

        let session = json_body(call(&app, "GET", &format!("/api/sessions/{id}"), None).await).await;
        assert_eq!(session["awaiting_response"], false);
        let roles: Vec<_> = session["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(roles, ["assistant", "user", "assistant"]);

        let response = call(&app, "POST", &messages_uri, Some(json!({ "message": "idea two" }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["session"]["messages"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_concurrent_send_is_refused() {
        let app = test_app_with_delay(Arc::default(), Duration::from_millis(200));
        let id = open_unlocked(&app).await;
        let messages_uri = format!("/api/sessions/{id}/messages");

        let first = tokio::spawn({
            let app = app.clone();
            let uri = messages_uri.clone();
            async move { call(&app, "POST", &uri, Some(json!({ "message": "first" }))).await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second = call(&app, "POST", &messages_uri, Some(json!({ "message": "second" }))).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(second).await["code"], "AWAITING_RESPONSE");

        assert_eq!(first.await.unwrap().status(), StatusCode::OK);
    }
}
