//! Contact form submission.

use crate::domain::foundation::ValidationError;

/// A message sent through the public contact form.
///
/// Nothing is stored; the submission is accepted and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: Option<String>,
}

impl ContactMessage {
    /// Checks that name, email, and message are present and non-empty.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
        subject: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let message = required("message", message)?;
        Ok(Self {
            name,
            email,
            message,
            subject: subject.filter(|s| !s.is_empty()),
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ValidationError::empty_field(field))
}
