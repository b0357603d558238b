//! Generic in-memory entity collection.
//!
//! Records live in a `Vec` behind a `tokio::sync::RwLock`, so iteration order
//! is insertion order. Every operation takes the lock exactly once; a
//! uniqueness check and the insert it guards happen under the same write
//! guard.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::catalog::{Course, Instructor, Package};
use crate::domain::foundation::{
    DomainError, EmailAddress, Entity, EntityId, EntityRepository, ErrorCode, Timestamp,
};
use crate::domain::learner::{Enrollment, User};
use crate::domain::outreach::Newsletter;
use crate::ports::{EnrollmentRepository, NewsletterRepository, UserRepository};

/// Per-entity uniqueness rules enforced on insert.
///
/// The default accepts every draft.
pub trait UniqueConstraint: Entity {
    fn check_unique(_existing: &[Self], _draft: &Self::Draft) -> Result<(), DomainError> {
        Ok(())
    }
}

impl UniqueConstraint for Course {}
impl UniqueConstraint for Package {}
impl UniqueConstraint for Instructor {}
impl UniqueConstraint for Enrollment {}

impl UniqueConstraint for User {
    fn check_unique(existing: &[Self], draft: &Self::Draft) -> Result<(), DomainError> {
        if existing.iter().any(|u| u.username == draft.username) {
            return Err(DomainError::new(ErrorCode::UsernameTaken, "Username already taken")
                .with_detail("username", draft.username.clone()));
        }
        if existing.iter().any(|u| u.email == draft.email) {
            return Err(DomainError::new(ErrorCode::EmailTaken, "Email already registered")
                .with_detail("email", draft.email.as_str()));
        }
        Ok(())
    }
}

impl UniqueConstraint for Newsletter {
    fn check_unique(existing: &[Self], draft: &EmailAddress) -> Result<(), DomainError> {
        if existing.iter().any(|n| &n.email == draft) {
            return Err(DomainError::new(ErrorCode::EmailTaken, "Email already subscribed")
                .with_detail("email", draft.as_str()));
        }
        Ok(())
    }
}

/// In-memory collection of one entity type.
#[derive(Debug)]
pub struct InMemoryCollection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a collection pre-populated with records, keeping their ids.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Clones every record matching the predicate, in insertion order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|&r| predicate(r))
            .cloned()
            .collect()
    }

    /// Clones the first record matching the predicate.
    pub async fn find<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        self.records.read().await.iter().find(|&r| predicate(r)).cloned()
    }
}

impl<T: Entity> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds and appends a record under an already-held write guard.
fn insert<T: UniqueConstraint>(records: &mut Vec<T>, draft: T::Draft) -> Result<T, DomainError> {
    T::check_unique(records, &draft)?;
    let record = T::from_draft(EntityId::generate(), Timestamp::now(), draft);
    records.push(record.clone());
    tracing::debug!(kind = T::KIND, id = %record.id(), "record created");
    Ok(record)
}

#[async_trait]
impl<T: UniqueConstraint> EntityRepository<T> for InMemoryCollection<T> {
    async fn create(&self, draft: T::Draft) -> Result<T, DomainError> {
        let mut records = self.records.write().await;
        insert(&mut records, draft)
    }

    async fn get_by_id(&self, id: &EntityId) -> Result<Option<T>, DomainError> {
        Ok(self.find(|r| r.id() == id).await)
    }

    async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.read().await.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryCollection<User> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.find(|u| u.username == username).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.find(|u| u.email.as_str() == email).await)
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryCollection<Enrollment> {
    async fn find_by_user(&self, user_id: &EntityId) -> Result<Vec<Enrollment>, DomainError> {
        Ok(self.filter(|e| &e.user_id == user_id).await)
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryCollection<Newsletter> {
    async fn subscribe(&self, email: EmailAddress) -> Result<Newsletter, DomainError> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter().find(|n| n.email == email) {
            return Ok(existing.clone());
        }
        insert(&mut records, email)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Newsletter>, DomainError> {
        Ok(self.find(|n| n.email.as_str() == email).await)
    }
}
