//! GetPackageHandler - Query handler for a single package.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Package};
use crate::domain::foundation::{EntityId, EntityRepository};

#[derive(Debug, Clone)]
pub struct GetPackageQuery {
    pub package_id: EntityId,
}

pub struct GetPackageHandler {
    packages: Arc<dyn EntityRepository<Package>>,
}

impl GetPackageHandler {
    pub fn new(packages: Arc<dyn EntityRepository<Package>>) -> Self {
        Self { packages }
    }

    pub async fn handle(&self, query: GetPackageQuery) -> Result<Package, CatalogError> {
        self.packages
            .get_by_id(&query.package_id)
            .await?
            .ok_or(CatalogError::PackageNotFound(query.package_id))
    }
}
