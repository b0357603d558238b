//! ListInstructorsHandler - Query handler for the instructor listing.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Instructor};
use crate::domain::foundation::EntityRepository;

pub struct ListInstructorsHandler {
    instructors: Arc<dyn EntityRepository<Instructor>>,
}

impl ListInstructorsHandler {
    pub fn new(instructors: Arc<dyn EntityRepository<Instructor>>) -> Self {
        Self { instructors }
    }

    pub async fn handle(&self) -> Result<Vec<Instructor>, CatalogError> {
        Ok(self.instructors.get_all().await?)
    }
}
