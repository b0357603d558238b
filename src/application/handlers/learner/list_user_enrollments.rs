//! ListUserEnrollmentsHandler - Query handler for a user's enrollments.

use std::sync::Arc;

use crate::domain::foundation::EntityId;
use crate::domain::learner::{Enrollment, EnrollmentError};
use crate::ports::EnrollmentRepository;

#[derive(Debug, Clone)]
pub struct ListUserEnrollmentsQuery {
    pub user_id: EntityId,
}

pub struct ListUserEnrollmentsHandler {
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl ListUserEnrollmentsHandler {
    pub fn new(enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollments }
    }

    /// Returns the user's enrollments in creation order. An unknown user
    /// simply has none.
    pub async fn handle(&self, query: ListUserEnrollmentsQuery) -> Result<Vec<Enrollment>, EnrollmentError> {
        Ok(self.enrollments.find_by_user(&query.user_id).await?)
    }
}
