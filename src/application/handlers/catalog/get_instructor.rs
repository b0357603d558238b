//! GetInstructorHandler - Query handler for a single instructor.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Instructor};
use crate::domain::foundation::{EntityId, EntityRepository};

#[derive(Debug, Clone)]
pub struct GetInstructorQuery {
    pub instructor_id: EntityId,
}

pub struct GetInstructorHandler {
    instructors: Arc<dyn EntityRepository<Instructor>>,
}

impl GetInstructorHandler {
    pub fn new(instructors: Arc<dyn EntityRepository<Instructor>>) -> Self {
        Self { instructors }
    }

    pub async fn handle(&self, query: GetInstructorQuery) -> Result<Instructor, CatalogError> {
        self.instructors
            .get_by_id(&query.instructor_id)
            .await?
            .ok_or(CatalogError::InstructorNotFound(query.instructor_id))
    }
}
