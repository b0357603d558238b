//! Course entity.

use crate::domain::foundation::{Entity, EntityId, Timestamp};

use super::{CatalogItem, DEFAULT_CATEGORY, DEFAULT_RATING};

/// A single course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub lessons: u32,
    /// Decimal string, e.g. "4.8".
    pub rating: String,
    pub category: String,
    /// Weak reference; the instructor may not exist.
    pub instructor_id: Option<EntityId>,
    pub created_at: Timestamp,
}

/// Fields supplied when creating a course. Omitted fields take the catalog
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub lessons: Option<u32>,
    pub rating: Option<String>,
    pub category: Option<String>,
    pub instructor_id: Option<EntityId>,
}

impl NewCourse {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Entity for Course {
    type Draft = NewCourse;
    const KIND: &'static str = "course";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: Timestamp, draft: NewCourse) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            thumbnail: draft.thumbnail,
            lessons: draft.lessons.unwrap_or(0),
            rating: draft.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
            category: draft.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            instructor_id: draft.instructor_id,
            created_at,
        }
    }
}

impl CatalogItem for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn category(&self) -> &str {
        &self.category
    }
}
