//! Catalog data configuration

use serde::Deserialize;

/// Catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Load the sample courses, packages, and instructors at startup
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

fn default_seed_sample_data() -> bool {
    true
}
