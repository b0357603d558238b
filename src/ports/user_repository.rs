//! User repository port.
//!
//! Extends the base [`EntityRepository`] with the lookups registration needs.
//!
//! # Uniqueness
//!
//! Implementations must reject a `create` whose username or email is
//! already present, returning a `DomainError` with code `UsernameTaken` or
//! `EmailTaken` and the offending value under the `username` / `email`
//! detail key. The check and insert must be atomic.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntityRepository};
use crate::domain::learner::User;

#[async_trait]
pub trait UserRepository: EntityRepository<User> {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
}
