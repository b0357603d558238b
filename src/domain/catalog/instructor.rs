//! Instructor entity.

use crate::domain::foundation::{Entity, EntityId, Timestamp};

use super::DEFAULT_RATING;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub id: EntityId,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub rating: String,
    pub expertise: Vec<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub struct NewInstructor {
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub rating: Option<String>,
    pub expertise: Vec<String>,
}

impl Entity for Instructor {
    type Draft = NewInstructor;
    const KIND: &'static str = "instructor";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: Timestamp, draft: NewInstructor) -> Self {
        Self {
            id,
            name: draft.name,
            title: draft.title,
            bio: draft.bio,
            avatar: draft.avatar,
            rating: draft.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
            expertise: draft.expertise,
            created_at,
        }
    }
}
