//! Package entity: a priced bundle of courses.

use crate::domain::foundation::{Entity, EntityId, Timestamp};

use super::{CatalogItem, DEFAULT_CATEGORY, DEFAULT_RATING};

/// A bundle of courses sold together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub original_price: Option<String>,
    pub discounted_price: Option<String>,
    pub category: String,
    pub rating: String,
    pub features: Vec<String>,
    /// Ordered weak references into the course collection.
    pub course_ids: Vec<EntityId>,
    pub created_at: Timestamp,
}

/// Fields supplied when creating a package.
#[derive(Debug, Clone, Default)]
pub struct NewPackage {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub original_price: Option<String>,
    pub discounted_price: Option<String>,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub features: Vec<String>,
    pub course_ids: Vec<EntityId>,
}

impl Entity for Package {
    type Draft = NewPackage;
    const KIND: &'static str = "package";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, created_at: Timestamp, draft: NewPackage) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            original_price: draft.original_price,
            discounted_price: draft.discounted_price,
            category: draft.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            rating: draft.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
            features: draft.features,
            course_ids: draft.course_ids,
            created_at,
        }
    }
}

impl CatalogItem for Package {
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
