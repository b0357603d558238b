//! ListCoursesHandler - Query handler for the course listing.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, CatalogFilter, Course};
use crate::domain::foundation::EntityRepository;

/// Query to list courses, optionally filtered.
#[derive(Debug, Clone)]
pub struct ListCoursesQuery {
    pub filter: CatalogFilter,
}

/// Handler for listing courses.
pub struct ListCoursesHandler {
    courses: Arc<dyn EntityRepository<Course>>,
}

impl ListCoursesHandler {
    pub fn new(courses: Arc<dyn EntityRepository<Course>>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, query: ListCoursesQuery) -> Result<Vec<Course>, CatalogError> {
        let all = self.courses.get_all().await?;
        Ok(query.filter.apply(&all))
    }
}
