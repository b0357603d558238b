//! Newsletter subscription entity.

use crate::domain::foundation::{EmailAddress, Entity, EntityId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Newsletter {
    pub id: EntityId,
    pub email: EmailAddress,
    pub subscribed_at: Timestamp,
}

impl Entity for Newsletter {
    type Draft = EmailAddress;
    const KIND: &'static str = "newsletter";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, subscribed_at: Timestamp, email: EmailAddress) -> Self {
        Self {
            id,
            email,
            subscribed_at,
        }
    }
}
