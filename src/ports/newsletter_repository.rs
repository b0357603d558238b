//! Newsletter repository port.
//!
//! # Design
//!
//! - **Idempotent subscribe**: subscribing an address that is already on the
//!   list returns the existing record instead of failing
//! - **Atomic**: the lookup and insert happen under one write lock, so two
//!   concurrent subscribes of the same address yield one record

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmailAddress, EntityRepository};
use crate::domain::outreach::Newsletter;

#[async_trait]
pub trait NewsletterRepository: EntityRepository<Newsletter> {
    /// Subscribe an address, returning the existing record if present.
    async fn subscribe(&self, email: EmailAddress) -> Result<Newsletter, DomainError>;

    /// Find a subscription by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Newsletter>, DomainError>;
}
