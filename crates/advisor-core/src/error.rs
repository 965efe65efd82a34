//! Error Types

use thiserror::Error;

use crate::intake::ValidationErrors;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// One or more intake fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Intake form was already submitted
    #[error("Intake form already submitted")]
    AlreadySubmitted,

    /// Chat message was empty
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Chat submitted before the access key gate was satisfied
    #[error("Access key required")]
    AccessKeyRequired,

    /// Access key too short to be accepted
    #[error("Access key rejected: must be longer than {0} characters")]
    AccessKeyRejected(usize),

    /// A previous submission is still in flight
    #[error("Still awaiting a response")]
    AwaitingResponse,

    /// Response provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Outbound form relay failed
    #[error("Relay error: {0}")]
    Relay(String),

    /// Session error
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AdvisorError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => format!("Please fix the highlighted fields: {errors}"),
            Self::AlreadySubmitted => "Your details have already been submitted.".into(),
            Self::EmptyMessage => "Message cannot be empty".into(),
            Self::AccessKeyRequired => "Please enter your API key first".into(),
            Self::AccessKeyRejected(_) => "Please enter a valid API key".into(),
            Self::AwaitingResponse => "Please wait for the current reply to finish.".into(),
            Self::Provider(_) | Self::ProviderUnavailable(_) => {
                "The AI service is currently unavailable. Please try again.".into()
            }
            Self::Session(_) => "This brainstorm session has ended. Please start a new one.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<ValidationErrors> for AdvisorError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
