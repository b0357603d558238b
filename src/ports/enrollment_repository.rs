//! Enrollment repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntityId, EntityRepository};
use crate::domain::learner::Enrollment;

#[async_trait]
pub trait EnrollmentRepository: EntityRepository<Enrollment> {
    /// All enrollments for a user, in creation order.
    ///
    /// An unknown user simply has no enrollments.
    async fn find_by_user(&self, user_id: &EntityId) -> Result<Vec<Enrollment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn EnrollmentRepository) {}
    }
}
