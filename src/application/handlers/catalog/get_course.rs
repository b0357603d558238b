//! GetCourseHandler - Query handler for a single course.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Course};
use crate::domain::foundation::{EntityId, EntityRepository};

/// Query to get a course by ID.
#[derive(Debug, Clone)]
pub struct GetCourseQuery {
    pub course_id: EntityId,
}

/// Handler for retrieving one course.
pub struct GetCourseHandler {
    courses: Arc<dyn EntityRepository<Course>>,
}

impl GetCourseHandler {
    pub fn new(courses: Arc<dyn EntityRepository<Course>>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<Course, CatalogError> {
        self.courses
            .get_by_id(&query.course_id)
            .await?
            .ok_or(CatalogError::CourseNotFound(query.course_id))
    }
}
