//! Outreach error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors from newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    InvalidEmail(String),
    Infrastructure(String),
}

impl NewsletterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NewsletterError::InvalidEmail(_) => ErrorCode::ValidationFailed,
            NewsletterError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            NewsletterError::InvalidEmail(_) => "Invalid email address".to_string(),
            NewsletterError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsletterError::InvalidEmail(reason) => write!(f, "Invalid email address: {}", reason),
            NewsletterError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for NewsletterError {}

impl From<ValidationError> for NewsletterError {
    fn from(err: ValidationError) -> Self {
        NewsletterError::InvalidEmail(err.to_string())
    }
}

impl From<DomainError> for NewsletterError {
    fn from(err: DomainError) -> Self {
        NewsletterError::Infrastructure(err.to_string())
    }
}

/// Errors from contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingFields(String),
}

impl ContactError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }

    pub fn message(&self) -> String {
        "Missing required fields".to_string()
    }
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingFields(field) => write!(f, "Missing required field: {}", field),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<ValidationError> for ContactError {
    fn from(err: ValidationError) -> Self {
        ContactError::MissingFields(err.field().to_string())
    }
}
