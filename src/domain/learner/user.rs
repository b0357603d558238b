//! User entity: a registered learner.

use crate::domain::foundation::{EmailAddress, Entity, EntityId, Timestamp, ValidationError};

/// A registered learner.
///
/// The password is an opaque string kept exactly as supplied; it is never
/// part of any response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Timestamp,
}

/// Validated registration data.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NewUser {
    /// Validates raw registration fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if username, email, or password is empty
    /// - `InvalidFormat` if the email is malformed
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        let email = EmailAddress::parse(email)?;
        let password = password.into();
        if password.is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        Ok(Self {
            username,
            email,
            password,
            first_name: None,
            last_name: None,
        })
    }

    pub fn with_name(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name.filter(|s| !s.is_empty());
        self.last_name = last_name.filter(|s| !s.is_empty());
        self
    }
}

impl Entity for User {
    type Draft = NewUser;
    const KIND: &'static str = "user";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: Timestamp, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
            password: draft.password,
            first_name: draft.first_name,
            last_name: draft.last_name,
            created_at,
        }
    }
}
