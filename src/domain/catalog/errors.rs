//! Catalog-specific error types.

use crate::domain::foundation::{DomainError, EntityId, ErrorCode};

/// Errors returned by catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    CourseNotFound(EntityId),
    PackageNotFound(EntityId),
    InstructorNotFound(EntityId),
    /// Storage failure.
    Infrastructure(String),
}

impl CatalogError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CatalogError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::CourseNotFound(_) => ErrorCode::CourseNotFound,
            CatalogError::PackageNotFound(_) => ErrorCode::PackageNotFound,
            CatalogError::InstructorNotFound(_) => ErrorCode::InstructorNotFound,
            CatalogError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            CatalogError::CourseNotFound(_) => "Course not found".to_string(),
            CatalogError::PackageNotFound(_) => "Package not found".to_string(),
            CatalogError::InstructorNotFound(_) => "Instructor not found".to_string(),
            CatalogError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::CourseNotFound(id) => write!(f, "Course not found: {}", id),
            CatalogError::PackageNotFound(id) => write!(f, "Package not found: {}", id),
            CatalogError::InstructorNotFound(id) => write!(f, "Instructor not found: {}", id),
            CatalogError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_match_api_contract() {
        let id = EntityId::new("x").unwrap();
        assert_eq!(CatalogError::CourseNotFound(id.clone()).message(), "Course not found");
        assert_eq!(CatalogError::PackageNotFound(id.clone()).message(), "Package not found");
        assert_eq!(CatalogError::InstructorNotFound(id).message(), "Instructor not found");
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: CatalogError = DomainError::storage("lock poisoned").into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
