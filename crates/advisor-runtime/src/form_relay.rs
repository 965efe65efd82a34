//! Form Relay Client
//!
//! Implementation of `IntakeRelay` that posts the intake fields as a
//! multipart form to a third-party form-forwarding service.

use advisor_core::{
    error::{AdvisorError, Result},
    intake::IntakeRecord,
    relay::IntakeRelay,
};
use async_trait::async_trait;
use reqwest::multipart::Form;

/// Relay address used when `FORM_RELAY_URL` is not set
pub const DEFAULT_RELAY_URL: &str = "https://formsubmit.co/justoneguylikethat@gmail.com";

/// Form relay configuration
#[derive(Clone, Debug)]
pub struct FormRelayConfig {
    /// Endpoint receiving the multipart POST
    pub url: String,
}

impl Default for FormRelayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RELAY_URL.into(),
        }
    }
}

impl FormRelayConfig {
    pub fn from_env() -> Self {
        let url = std::env::var("FORM_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.into());
        Self { url }
    }
}

/// HTTP form relay
pub struct FormRelayClient {
    client: reqwest::Client,
    config: FormRelayConfig,
}

impl FormRelayClient {
    /// Create from configuration, rejecting malformed URLs up front
    pub fn from_config(config: FormRelayConfig) -> Result<Self> {
        reqwest::Url::parse(&config.url)
            .map_err(|e| AdvisorError::Config(format!("invalid FORM_RELAY_URL '{}': {e}", config.url)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(FormRelayConfig::from_env())
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn build_form(record: &IntakeRecord) -> Form {
        record
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
    }
}

#[async_trait]
impl IntakeRelay for FormRelayClient {
    async fn deliver(&self, record: &IntakeRecord) -> Result<()> {
        let response = self
            .client
            .post(&self.config.url)
            .multipart(Self::build_form(record))
            .send()
            .await
            .map_err(|e| AdvisorError::Relay(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::Relay(format!("relay responded with {status}")));
        }

        tracing::debug!(%status, "intake relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use advisor_core::intake::IntakeDraft;
    use axum::{
        extract::{Multipart, State},
        http::StatusCode,
        routing::post,
        Router,
    };

    /// Local stand-in for the relay service: records every form field it
    /// receives and answers with a fixed status
    #[derive(Clone)]
    struct StubRelayServer {
        fields: Arc<Mutex<Vec<(String, String)>>>,
        status: StatusCode,
    }

    async fn receive(State(server): State<StubRelayServer>, mut form: Multipart) -> StatusCode {
        while let Ok(Some(field)) = form.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.unwrap_or_default();
            server.fields.lock().unwrap().push((name, value));
        }
        server.status
    }

    async fn spawn_stub(status: StatusCode) -> (FormRelayClient, Arc<Mutex<Vec<(String, String)>>>) {
        let server = StubRelayServer {
            fields: Arc::default(),
            status,
        };
        let fields = Arc::clone(&server.fields);
        let app = Router::new().route("/relay", post(receive)).with_state(server);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = FormRelayClient::from_config(FormRelayConfig {
            url: format!("http://{addr}/relay"),
        })
        .unwrap();
        (client, fields)
    }

    fn record() -> IntakeRecord {
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

    #[test]
    fn test_default_url() {
        assert_eq!(FormRelayConfig::default().url, DEFAULT_RELAY_URL);
    }

    #[test]
    fn test_rejects_malformed_url() {
        let result = FormRelayClient::from_config(FormRelayConfig {
            url: "not a url".into(),
        });
        assert!(matches!(result, Err(AdvisorError::Config(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_relay_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = FormRelayClient::from_config(FormRelayConfig {
            url: format!("http://{addr}/relay"),
        })
        .unwrap();

        let result = client.deliver(&record()).await;
        assert!(matches!(result, Err(AdvisorError::Relay(_))));
    }

    #[tokio::test]
    async fn test_delivers_all_fields_as_multipart() {
        let (client, fields) = spawn_stub(StatusCode::OK).await;

        client.deliver(&record()).await.unwrap();

        let received = fields.lock().unwrap().clone();
        let names: Vec<_> = received.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["name", "email", "companyName", "industry", "description", "stage", "challenges"]
        );
        assert_eq!(received[2].1, "Acme");
        assert_eq!(received[6].1, "");
    }

    #[tokio::test]
    async fn test_error_status_is_relay_error() {
        let (client, fields) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR).await;

        let result = client.deliver(&record()).await;

        assert!(matches!(result, Err(AdvisorError::Relay(msg)) if msg.contains("500")));
        assert_eq!(fields.lock().unwrap().len(), 7);
    }
}
