//! Domain error types
//!
//! These errors are framework-agnostic and cover every failure a back-office
//! action can hit: transport, upstream status, decoding, client-side
//! validation and workflow guards.

use std::fmt;

use crate::services::validation::ValidationErrors;

#[derive(Debug)]
pub enum DomainError {
    /// Network or transport failure before a response was received
    Transport(String),
    /// Backend answered with a non-2xx status
    Upstream { status: u16, body: String },
    /// Backend answered 2xx with a body we could not decode
    Decode(String),
    /// Client-side validation failed before submission
    Validation(ValidationErrors),
    /// Path key that cannot address the collection
    InvalidId(String),
    /// Resource not found
    NotFound,
    /// Destructive action attempted without explicit confirmation
    ConfirmationRequired,
    /// Workflow step attempted out of order
    InvalidTransition(String),
}

impl DomainError {
    /// Upstream 5xx responses are the only retryable failures.
    pub fn is_server_error(&self) -> bool {
        matches!(self, DomainError::Upstream { status, .. } if (500..=599).contains(status))
    }

    /// Message shown to the operator for a failed action.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Upstream { status: 404, .. } => "endpoint not found".to_string(),
            DomainError::Upstream { status, .. } if (500..=599).contains(status) => {
                "server error".to_string()
            }
            DomainError::Validation(errors) => errors.to_string(),
            DomainError::InvalidId(msg) => msg.clone(),
            DomainError::NotFound => "record not found".to_string(),
            DomainError::ConfirmationRequired => "confirmation required".to_string(),
            DomainError::InvalidTransition(msg) => msg.clone(),
            _ => "an error occurred, please try again".to_string(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DomainError::Upstream { status, body } => {
                write!(f, "Upstream error {}: {}", status, body)
            }
            DomainError::Decode(msg) => write!(f, "Decode error: {}", msg),
            DomainError::Validation(errors) => write!(f, "Validation error: {}", errors),
            DomainError::InvalidId(msg) => write!(f, "Invalid id: {}", msg),
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::ConfirmationRequired => write!(f, "Confirmation required"),
            DomainError::InvalidTransition(msg) => write!(f, "Invalid transition: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Decode(e.to_string())
        } else {
            DomainError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Decode(e.to_string())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}
