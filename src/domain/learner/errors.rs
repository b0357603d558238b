//! Learner-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors from user registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    ValidationFailed { field: String, message: String },
    UsernameTaken(String),
    EmailTaken(String),
    Infrastructure(String),
}

impl UserError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::UsernameTaken(_) => ErrorCode::UsernameTaken,
            UserError::EmailTaken(_) => ErrorCode::EmailTaken,
            UserError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            UserError::ValidationFailed { message, .. } => message.clone(),
            UserError::UsernameTaken(_) => "Username already taken".to_string(),
            UserError::EmailTaken(_) => "Email already registered".to_string(),
            UserError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::ValidationFailed { field, message } => {
                write!(f, "Validation failed for {}: {}", field, message)
            }
            UserError::UsernameTaken(name) => write!(f, "Username already taken: {}", name),
            UserError::EmailTaken(email) => write!(f, "Email already registered: {}", email),
            UserError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for UserError {}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        let detail = |key: &str| err.details.get(key).cloned().unwrap_or_default();
        match err.code {
            ErrorCode::UsernameTaken => UserError::UsernameTaken(detail("username")),
            ErrorCode::EmailTaken => UserError::EmailTaken(detail("email")),
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

/// Errors from enrollment commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// Required fields missing or contradictory.
    ValidationFailed { field: String, message: String },
    Infrastructure(String),
}

impl EnrollmentError {
    pub fn missing_fields() -> Self {
        EnrollmentError::ValidationFailed {
            field: "userId".to_string(),
            message: "Missing required fields".to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EnrollmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EnrollmentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            EnrollmentError::ValidationFailed { message, .. } => message.clone(),
            EnrollmentError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentError::ValidationFailed { field, message } => {
                write!(f, "Validation failed for {}: {}", field, message)
            }
            EnrollmentError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for EnrollmentError {}

impl From<ValidationError> for EnrollmentError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => EnrollmentError::ValidationFailed {
                field,
                message: "Missing required fields".to_string(),
            },
            ValidationError::InvalidFormat { field, reason } => {
                EnrollmentError::ValidationFailed { field, message: reason }
            }
        }
    }
}

impl From<DomainError> for EnrollmentError {
    fn from(err: DomainError) -> Self {
        EnrollmentError::Infrastructure(err.to_string())
    }
}
