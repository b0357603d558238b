//! Enrollment entity: a user signed up for a course or a package.

use crate::domain::foundation::{Entity, EntityId, Timestamp, ValidationError};

/// What an enrollment points at. Exactly one target per enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentTarget {
    Package(EntityId),
    Course(EntityId),
}

impl EnrollmentTarget {
    /// Builds a target from the two optional request fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when neither id is given
    /// - `InvalidFormat` when both are given
    pub fn from_parts(
        package_id: Option<EntityId>,
        course_id: Option<EntityId>,
    ) -> Result<Self, ValidationError> {
        match (package_id, course_id) {
            (Some(package_id), None) => Ok(EnrollmentTarget::Package(package_id)),
            (None, Some(course_id)) => Ok(EnrollmentTarget::Course(course_id)),
            (None, None) => Err(ValidationError::empty_field("packageId or courseId")),
            (Some(_), Some(_)) => Err(ValidationError::invalid_format(
                "packageId or courseId",
                "provide exactly one of packageId or courseId",
            )),
        }
    }

    pub fn package_id(&self) -> Option<&EntityId> {
        match self {
            EnrollmentTarget::Package(id) => Some(id),
            EnrollmentTarget::Course(_) => None,
        }
    }

    pub fn course_id(&self) -> Option<&EntityId> {
        match self {
            EnrollmentTarget::Course(id) => Some(id),
            EnrollmentTarget::Package(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EntityId,
    /// Weak reference; the user need not exist.
    pub user_id: EntityId,
    pub target: EnrollmentTarget,
    pub enrolled_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub user_id: EntityId,
    pub target: EnrollmentTarget,
}

impl Entity for Enrollment {
    type Draft = NewEnrollment;
    const KIND: &'static str = "enrollment";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, enrolled_at: Timestamp, draft: NewEnrollment) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            target: draft.target,
            enrolled_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EntityId {
        EntityId::new(s).unwrap()
    }

    #[test]
    fn from_parts_accepts_single_target() {
        let package = EnrollmentTarget::from_parts(Some(id("1")), None).unwrap();
        assert_eq!(package.package_id(), Some(&id("1")));
        assert_eq!(package.course_id(), None);

        let course = EnrollmentTarget::from_parts(None, Some(id("7"))).unwrap();
        assert_eq!(course.course_id(), Some(&id("7")));
        assert_eq!(course.package_id(), None);
    }

    #[test]
    fn from_parts_rejects_missing_target() {
        assert!(matches!(
            EnrollmentTarget::from_parts(None, None),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn from_parts_rejects_both_targets() {
        assert!(matches!(
            EnrollmentTarget::from_parts(Some(id("1")), Some(id("2"))),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
