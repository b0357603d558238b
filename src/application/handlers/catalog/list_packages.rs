//! ListPackagesHandler - Query handler for the package listing.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, CatalogFilter, Package};
use crate::domain::foundation::EntityRepository;

/// Query to list packages, optionally filtered.
#[derive(Debug, Clone)]
pub struct ListPackagesQuery {
    pub filter: CatalogFilter,
}

pub struct ListPackagesHandler {
    packages: Arc<dyn EntityRepository<Package>>,
}

impl ListPackagesHandler {
    pub fn new(packages: Arc<dyn EntityRepository<Package>>) -> Self {
        Self { packages }
    }

    pub async fn handle(&self, query: ListPackagesQuery) -> Result<Vec<Package>, CatalogError> {
        let all = self.packages.get_all().await?;
        Ok(query.filter.apply(&all))
    }
}
