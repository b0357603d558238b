//! SubscribeNewsletterHandler - Command handler for newsletter signups.

use std::sync::Arc;

use crate::domain::foundation::EmailAddress;
use crate::domain::outreach::{Newsletter, NewsletterError};
use crate::ports::NewsletterRepository;

#[derive(Debug, Clone)]
pub struct SubscribeNewsletterCommand {
    pub email: String,
}

/// Handler for newsletter subscription.
///
/// Subscribing an address that is already on the list returns the existing
/// record unchanged.
pub struct SubscribeNewsletterHandler {
    newsletters: Arc<dyn NewsletterRepository>,
}

impl SubscribeNewsletterHandler {
    pub fn new(newsletters: Arc<dyn NewsletterRepository>) -> Self {
        Self { newsletters }
    }

    pub async fn handle(&self, cmd: SubscribeNewsletterCommand) -> Result<Newsletter, NewsletterError> {
        let email = EmailAddress::parse(cmd.email)?;
        let subscription = self.newsletters.subscribe(email).await?;
        tracing::info!(subscription_id = %subscription.id, "newsletter subscription recorded");
        Ok(subscription)
    }
}
