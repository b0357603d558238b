//! GetPackageCoursesHandler - Resolves a package's courses.

use std::sync::Arc;

use crate::domain::catalog::query::courses_in_package;
use crate::domain::catalog::{CatalogError, Course, Package};
use crate::domain::foundation::{EntityId, EntityRepository};

#[derive(Debug, Clone)]
pub struct GetPackageCoursesQuery {
    pub package_id: EntityId,
}

/// Handler joining a package to the courses it references.
///
/// The package must exist; course references that do not resolve are
/// skipped.
pub struct GetPackageCoursesHandler {
    packages: Arc<dyn EntityRepository<Package>>,
    courses: Arc<dyn EntityRepository<Course>>,
}

impl GetPackageCoursesHandler {
    pub fn new(
        packages: Arc<dyn EntityRepository<Package>>,
        courses: Arc<dyn EntityRepository<Course>>,
    ) -> Self {
        Self { packages, courses }
    }

    pub async fn handle(&self, query: GetPackageCoursesQuery) -> Result<Vec<Course>, CatalogError> {
        let package = self
            .packages
            .get_by_id(&query.package_id)
            .await?
            .ok_or(CatalogError::PackageNotFound(query.package_id))?;

        let courses = self.courses.get_all().await?;
        Ok(courses_in_package(&package, &courses))
    }
}
