//! Base repository trait shared by every entity collection.
//!
//! This module provides the generic `EntityRepository<T>` trait with the
//! create/get-by-id/get-all contract every collection offers. Collections with
//! extra lookups extend it in `crate::ports`.
//!
//! # Example
//!
//! ```ignore
//! #[async_trait]
//! pub trait EnrollmentRepository: EntityRepository<Enrollment> {
//!     async fn find_by_user(&self, user_id: &EntityId) -> Result<Vec<Enrollment>, DomainError>;
//! }
//!
//! pub struct ListUserEnrollmentsHandler {
//!     repo: Arc<dyn EnrollmentRepository>,
//! }
//! ```

use async_trait::async_trait;

use super::{DomainError, EntityId, Timestamp};

/// A stored record with an immutable id and creation time.
///
/// `Draft` is the caller-supplied part of the record; the repository assigns
/// the id and timestamp and calls [`Entity::from_draft`] to build the stored
/// value.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Caller-supplied fields for a new record.
    type Draft: Send + 'static;

    /// Human-readable collection name, used in logs and errors.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> &EntityId;

    /// Builds the stored record from a draft plus the assigned id and time.
    fn from_draft(id: EntityId, created_at: Timestamp, draft: Self::Draft) -> Self;
}

/// Base trait for entity collections.
///
/// # Error Handling
///
/// Absence is never an error: `get_by_id` returns `Ok(None)`. `Err` is
/// reserved for storage failures and, for collections with uniqueness
/// constraints, conflicts detected during `create`.
#[async_trait]
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// Assigns a fresh id and creation timestamp, stores the record, and
    /// returns it.
    async fn create(&self, draft: T::Draft) -> Result<T, DomainError>;

    /// Finds a record by id.
    async fn get_by_id(&self, id: &EntityId) -> Result<Option<T>, DomainError>;

    /// Returns every record in insertion order.
    async fn get_all(&self) -> Result<Vec<T>, DomainError>;

    /// Checks if a record with the given id exists.
    async fn exists(&self, id: &EntityId) -> Result<bool, DomainError> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
