//! SubmitContactHandler - Accepts contact form submissions.

use crate::domain::outreach::{ContactError, ContactMessage};

#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub subject: Option<String>,
}

/// Handler for the contact form. Submissions are logged, not stored.
#[derive(Debug, Default)]
pub struct SubmitContactHandler;

impl SubmitContactHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<ContactMessage, ContactError> {
        let submission = ContactMessage::new(cmd.name, cmd.email, cmd.message, cmd.subject)?;
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            "contact form submitted"
        );
        Ok(submission)
    }
}
