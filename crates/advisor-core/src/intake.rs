//! Intake Form
//!
//! Lead-capture form: field validation, the submit state machine, and the
//! validated [`IntakeRecord`] handed to the brainstorm session as context.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::relay::IntakeRelay;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_COMPANY_CHARS: usize = 2;
pub const MIN_INDUSTRY_CHARS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Standard email syntax: no leading dot, no consecutive dots.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Form fields, named as they appear on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    Name,
    Email,
    CompanyName,
    Industry,
    Description,
    Stage,
    Challenges,
}

impl IntakeField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::CompanyName,
        Self::Industry,
        Self::Description,
        Self::Stage,
        Self::Challenges,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::Industry => "industry",
            Self::Description => "description",
            Self::Stage => "stage",
            Self::Challenges => "challenges",
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field validation failure
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: IntakeField,
    pub message: String,
}

/// All field failures from one validation pass, in form order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: IntakeField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn push(&mut self, field: IntakeField, message: &str) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<_> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Raw, unvalidated form input
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeDraft {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub industry: String,
    pub description: String,
    pub stage: String,
    pub challenges: String,
}

impl IntakeDraft {
    pub fn field(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Name => &self.name,
            IntakeField::Email => &self.email,
            IntakeField::CompanyName => &self.company_name,
            IntakeField::Industry => &self.industry,
            IntakeField::Description => &self.description,
            IntakeField::Stage => &self.stage,
            IntakeField::Challenges => &self.challenges,
        }
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            IntakeField::Name => self.name = value,
            IntakeField::Email => self.email = value,
            IntakeField::CompanyName => self.company_name = value,
            IntakeField::Industry => self.industry = value,
            IntakeField::Description => self.description = value,
            IntakeField::Stage => self.stage = value,
            IntakeField::Challenges => self.challenges = value,
        }
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> std::result::Result<IntakeRecord, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.push(IntakeField::Name, "Name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.push(IntakeField::Email, "Please enter a valid email address");
        }
        if self.company_name.chars().count() < MIN_COMPANY_CHARS {
            errors.push(
                IntakeField::CompanyName,
                "Company name must be at least 2 characters",
            );
        }
        if self.industry.chars().count() < MIN_INDUSTRY_CHARS {
            errors.push(IntakeField::Industry, "Please specify your industry");
        }
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(
                IntakeField::Description,
                "Please provide a brief description of your startup (min 10 characters)",
            );
        }
        if self.stage.is_empty() {
            errors.push(IntakeField::Stage, "Please select your startup stage");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(IntakeRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            company_name: self.company_name.clone(),
            industry: self.industry.clone(),
            description: self.description.clone(),
            stage: self.stage.clone(),
            challenges: Some(self.challenges.clone()).filter(|c| !c.is_empty()),
        })
    }
}

/// A validated intake submission. Only constructible through validation,
/// including when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IntakeDraft")]
pub struct IntakeRecord {
    name: String,
    email: String,
    company_name: String,
    industry: String,
    description: String,
    stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenges: Option<String>,
}

impl TryFrom<IntakeDraft> for IntakeRecord {
    type Error = ValidationErrors;

    fn try_from(draft: IntakeDraft) -> std::result::Result<Self, Self::Error> {
        draft.validate()
    }
}

impl IntakeRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn challenges(&self) -> Option<&str> {
        self.challenges.as_deref()
    }

    /// Field/value pairs for the outbound multipart POST, in form order.
    /// Missing challenges are sent as an empty string.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        IntakeField::ALL
            .iter()
            .map(|&field| {
                let value = match field {
                    IntakeField::Name => self.name.clone(),
                    IntakeField::Email => self.email.clone(),
                    IntakeField::CompanyName => self.company_name.clone(),
                    IntakeField::Industry => self.industry.clone(),
                    IntakeField::Description => self.description.clone(),
                    IntakeField::Stage => self.stage.clone(),
                    IntakeField::Challenges => self.challenges.clone().unwrap_or_default(),
                };
                (field.as_str(), value)
            })
            .collect()
    }
}

/// Where the form is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Editing,
    Submitting,
    Submitted,
}

/// What happened to the outbound POST.
///
/// The form reaches `Submitted` either way; `delivered` records whether the
/// relay actually accepted it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub delivered: bool,
}

/// Intake form state machine: `Editing -> Submitting -> Submitted`
#[derive(Clone, Debug)]
pub struct IntakeForm {
    draft: IntakeDraft,
    state: FormState,
    errors: ValidationErrors,
    record: Option<IntakeRecord>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::with_draft(IntakeDraft::default())
    }

    pub fn with_draft(draft: IntakeDraft) -> Self {
        Self {
            draft,
            state: FormState::Editing,
            errors: ValidationErrors::default(),
            record: None,
        }
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting)
    }

    /// Errors from the last rejected submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update a field while editing; ignored once submission has started
    pub fn set_field(&mut self, field: IntakeField, value: impl Into<String>) {
        if self.state == FormState::Editing {
            self.draft.set(field, value);
        }
    }

    /// Validate, relay, and move to `Submitted`.
    ///
    /// Relay failures are logged and reported through
    /// [`SubmissionOutcome::delivered`], never as an error.
    pub async fn submit(&mut self, relay: &dyn IntakeRelay) -> Result<SubmissionOutcome> {
        match self.state {
            FormState::Submitted => return Err(AdvisorError::AlreadySubmitted),
            FormState::Submitting => return Err(AdvisorError::AwaitingResponse),
            FormState::Editing => {}
        }

        let record = match self.draft.validate() {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(fields = %errors, "intake validation failed");
                self.errors = errors.clone();
                return Err(AdvisorError::Validation(errors));
            }
        };

        self.errors = ValidationErrors::default();
        self.state = FormState::Submitting;

        let delivered = match relay.deliver(&record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Error submitting intake form: {}", e);
                false
            }
        };

        tracing::info!(company = record.company_name(), delivered, "intake submitted");
        self.record = Some(record);
        self.state = FormState::Submitted;

        Ok(SubmissionOutcome { delivered })
    }

    /// The validated record, available once submitted, for the next view
    pub fn handoff(&self) -> Option<&IntakeRecord> {
        self.record.as_ref()
    }
}
