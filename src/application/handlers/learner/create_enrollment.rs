//! CreateEnrollmentHandler - Command handler for enrolling a user.

use std::sync::Arc;

use crate::domain::foundation::EntityId;
use crate::domain::learner::{Enrollment, EnrollmentError, EnrollmentTarget, NewEnrollment};
use crate::ports::EnrollmentRepository;

/// Command to enroll a user in a package or a course.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct CreateEnrollmentCommand {
    pub user_id: Option<String>,
    pub package_id: Option<String>,
    pub course_id: Option<String>,
}

/// Handler for creating enrollments.
///
/// Referenced ids are stored as given; they are not checked against the
/// catalog or the user list.
pub struct CreateEnrollmentHandler {
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl CreateEnrollmentHandler {
    pub fn new(enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollments }
    }

    pub async fn handle(&self, cmd: CreateEnrollmentCommand) -> Result<Enrollment, EnrollmentError> {
        let user_id = non_empty_id(cmd.user_id)?.ok_or_else(EnrollmentError::missing_fields)?;
        let target = EnrollmentTarget::from_parts(
            non_empty_id(cmd.package_id)?,
            non_empty_id(cmd.course_id)?,
        )?;

        let enrollment = self
            .enrollments
            .create(NewEnrollment { user_id, target })
            .await?;

        tracing::info!(
            enrollment_id = %enrollment.id,
            user_id = %enrollment.user_id,
            "enrollment created"
        );
        Ok(enrollment)
    }
}

/// Empty strings count as absent; any other value must be a valid id.
fn non_empty_id(value: Option<String>) -> Result<Option<EntityId>, EnrollmentError> {
    value
        .filter(|v| !v.is_empty())
        .map(EntityId::new)
        .transpose()
        .map_err(EnrollmentError::from)
}
